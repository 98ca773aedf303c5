use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Pricing tier selection, stored independently of bookings as a plain
/// string. Last write wins, no history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Plan {
    Basic,
    Premium,
    Agency,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Premium => "Premium",
            Plan::Agency => "Agency",
        }
    }
}

impl std::str::FromStr for Plan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Plan::Basic),
            "Premium" => Ok(Plan::Premium),
            "Agency" => Ok(Plan::Agency),
            other => Err(DomainError::UnknownPlan(other.to_string())),
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
