//! Config field path.

/// Dotted path of a config field, used to point diagnostics at the key.
///
/// ```ignore
/// diag.error(DeployConfig::SEGMENT, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Table the field lives in: `deploy` for `deploy.segment`.
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or("", |(section, _)| section)
    }

    /// Key inside its table: `segment` for `deploy.segment`.
    pub fn key(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(_, key)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key() {
        let field = FieldPath::new("deploy.buffer_size");
        assert_eq!(field.section(), "deploy");
        assert_eq!(field.key(), "buffer_size");

        let bare = FieldPath::new("scale");
        assert_eq!(bare.section(), "");
        assert_eq!(bare.key(), "scale");
    }
}
