//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// One rejected config value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

/// Rendered under its section header: `  key: message`, then the hint.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.field.key();
        write!(
            f,
            "  {}: {}",
            key.if_supports_color(Stderr, |k| k.cyan()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n    {} {}",
                "try".if_supports_color(Stderr, |t| t.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Validation errors collected across all sections, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Ok` when nothing was rejected.
    pub fn check(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }

    /// Diagnostics grouped by section, sections in first-reported order.
    fn by_section(&self) -> Vec<(&'static str, Vec<&ConfigDiagnostic>)> {
        let mut groups: Vec<(&'static str, Vec<&ConfigDiagnostic>)> = Vec::new();
        for diag in &self.errors {
            let section = diag.field.section();
            match groups.iter_mut().find(|(name, _)| *name == section) {
                Some((_, items)) => items.push(diag),
                None => groups.push((section, vec![diag])),
            }
        }
        groups
    }
}

/// ```text
/// invalid configuration (2 values rejected)
///
/// [deploy]
///   buffer_size: must be greater than 0
///   segment: `..` is not a single directory name
///     try use a plain name such as "pge"
/// ```
impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{} ({} value{} rejected)",
            "invalid configuration".if_supports_color(Stderr, |t| t.red()),
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for (section, items) in self.by_section() {
            write!(f, "\n\n[{section}]")?;
            for diag in items {
                write!(f, "\n{diag}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
