//! User tier classification

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a type label does not name one of the known tiers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The user type '{label}' is not valid")]
pub struct TierError {
    pub label: String,
}

/// Closed set of user tiers driving the valuation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserTier {
    Normal,
    SuperUser,
    Premium,
}

impl UserTier {
    pub const ALL: [UserTier; 3] = [Self::Normal, Self::SuperUser, Self::Premium];

    /// Map a free-text label to a tier.
    ///
    /// Matching is exact and case-sensitive; anything else is an error,
    /// never a default tier.
    pub fn from_label(label: &str) -> Result<Self, TierError> {
        match label {
            "Normal" => Ok(Self::Normal),
            "SuperUser" => Ok(Self::SuperUser),
            "Premium" => Ok(Self::Premium),
            other => Err(TierError {
                label: other.to_string(),
            }),
        }
    }

    /// Canonical label for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::SuperUser => "SuperUser",
            Self::Premium => "Premium",
        }
    }
}

impl FromStr for UserTier {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl std::fmt::Display for UserTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(UserTier::from_label("Normal"), Ok(UserTier::Normal));
        assert_eq!(UserTier::from_label("SuperUser"), Ok(UserTier::SuperUser));
        assert_eq!(UserTier::from_label("Premium"), Ok(UserTier::Premium));
    }

    #[test]
    fn test_label_round_trip() {
        for tier in UserTier::ALL {
            assert_eq!(UserTier::from_label(tier.as_str()), Ok(tier));
        }
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        for label in ["", "normal", "NORMAL", "superuser", "Super User", " Premium", "Gold"] {
            let err = UserTier::from_label(label).unwrap_err();
            assert_eq!(err.label, label);
        }
    }

    #[test]
    fn test_error_message() {
        let err = UserTier::from_label("Gold").unwrap_err();
        assert_eq!(err.to_string(), "The user type 'Gold' is not valid");
    }

    #[test]
    fn test_from_str() {
        let tier: UserTier = "Premium".parse().unwrap();
        assert_eq!(tier, UserTier::Premium);
        assert!("premium".parse::<UserTier>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_labels() {
        let json = serde_json::to_string(&UserTier::SuperUser).unwrap();
        assert_eq!(json, "\"SuperUser\"");

        let tier: UserTier = serde_json::from_str("\"Normal\"").unwrap();
        assert_eq!(tier, UserTier::Normal);
    }
}
