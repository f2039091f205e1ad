//! Player roles.

use serde::{Deserialize, Serialize};

/// The narrative role a player inhabits for a session.
///
/// Each role has its own authored segment sequence. The set is expected to
/// grow as new stories are written; nothing outside the story catalog keys
/// on specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The player hunting for clues.
    Investigator,
    /// The player being hunted.
    Murderer,
}

impl Role {
    /// Returns the lowercase wire name for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Investigator => "investigator",
            Self::Murderer => "murderer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investigator" => Ok(Self::Investigator),
            "murderer" => Ok(Self::Murderer),
            other => Err(crate::error::DomainError::Validation(format!(
                "unknown role: {other}"
            ))),
        }
    }
}
