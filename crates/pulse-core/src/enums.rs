//! Vertical and drill-down target enums.
//!
//! All enums use lowercase serialization so they match the `industry`
//! column values stored in the backend views.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Vertical
// ---------------------------------------------------------------------------

/// Industry vertical that scopes every dashboard read.
///
/// ```text
/// dental ⇄ aesthetic
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    #[default]
    Dental,
    Aesthetic,
}

impl Vertical {
    /// Both verticals, in toggle order.
    pub const ALL: [Self; 2] = [Self::Dental, Self::Aesthetic];

    /// Return the string stored in the `industry` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dental => "dental",
            Self::Aesthetic => "aesthetic",
        }
    }

    /// Capitalized display title (`Dental`, `Aesthetic`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dental => "Dental",
            Self::Aesthetic => "Aesthetic",
        }
    }

    /// The other vertical.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dental => Self::Aesthetic,
            Self::Aesthetic => Self::Dental,
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dental" => Ok(Self::Dental),
            "aesthetic" => Ok(Self::Aesthetic),
            _ => Err(CoreError::InvalidVertical(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DetailTarget
// ---------------------------------------------------------------------------

/// A single procedure or category selected for an article drill-down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DetailTarget {
    Procedure(String),
    Category(String),
}

impl DetailTarget {
    /// `procedure` or `category`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Procedure(_) => "procedure",
            Self::Category(_) => "category",
        }
    }

    /// The selected entity id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Procedure(id) | Self::Category(id) => id,
        }
    }
}

impl fmt::Display for DetailTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}
