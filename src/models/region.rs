use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SalesError;

// ---------------------------------------------------------------------------
// Region — Geographic filter accepted by the sales API
// ---------------------------------------------------------------------------

/// Region filter. [`Region::All`] (displayed as "Brasil") disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    All,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    /// All regions in sidebar order.
    pub const ALL: [Region; 6] = [
        Region::All,
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    /// Display name, as shown in the sidebar.
    pub fn name(&self) -> &'static str {
        match self {
            Region::All => "Brasil",
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    /// Value for the `regiao` query parameter. Empty for [`Region::All`].
    pub fn query_value(&self) -> String {
        match self {
            Region::All => String::new(),
            other => other.name().to_lowercase(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = SalesError;

    /// Case-insensitive. The empty string maps to [`Region::All`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Region::All);
        }
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SalesError::InvalidArgument(format!("Unknown region: {}", s)))
    }
}
