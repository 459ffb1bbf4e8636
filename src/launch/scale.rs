//! Renderer resolution scale.
//!
//! | Value        | Meaning                                   |
//! |--------------|-------------------------------------------|
//! | `0`          | logical (density-independent) pixels      |
//! | `1`          | native physical pixel resolution          |
//! | other `> 0`  | explicit custom scale factor              |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid resolution scale `{0}`: expected 0, 1 or another positive number")]
pub struct ScaleError(pub f32);

/// Resolution the renderer is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub enum ResolutionScale {
    #[default]
    Logical,
    Native,
    Custom(f32),
}

impl ResolutionScale {
    pub fn from_factor(factor: f32) -> Result<Self, ScaleError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ScaleError(factor));
        }
        Ok(if factor == 0.0 {
            Self::Logical
        } else if factor == 1.0 {
            Self::Native
        } else {
            Self::Custom(factor)
        })
    }

    /// Raw factor as handed to the renderer.
    pub fn factor(self) -> f32 {
        match self {
            Self::Logical => 0.0,
            Self::Native => 1.0,
            Self::Custom(factor) => factor,
        }
    }
}

impl TryFrom<f32> for ResolutionScale {
    type Error = ScaleError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_factor(value)
    }
}

impl From<ResolutionScale> for f32 {
    fn from(scale: ResolutionScale) -> Self {
        scale.factor()
    }
}

impl fmt::Display for ResolutionScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logical => f.write_str("logical"),
            Self::Native => f.write_str("native"),
            Self::Custom(factor) => write!(f, "x{factor}"),
        }
    }
}
