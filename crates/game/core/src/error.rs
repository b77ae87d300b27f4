//! Common error infrastructure for sheet-core.
//!
//! Every fallible rules operation returns [`SheetError`]. "No value" results
//! (an untrained skill, an aggregate with no usage group) are `Option::None`
//! and never errors.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure mode has its own variant with the offending input
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: No I/O, no allocation beyond the carried names

use crate::bonus::BonusGroup;
use crate::units::Halves;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The same request may succeed later (e.g. after a level-up)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: A rules path that has no mapping yet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the character state changes.
    ///
    /// Examples: not enough skill points in the pool
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown ability code, negative point investment
    Validation,

    /// Internal error - the ruleset has no defined behavior for the request.
    ///
    /// Examples: stacking total requested for the `Other` usage group
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error points at a missing rules mapping.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for rules errors.
///
/// Provides severity classification and stable error codes for logging and
/// tests, independent of the human-readable `Display` text.
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the bonus, skill and roster operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// No stacking rule is defined for this usage group yet.
    #[error("no stacking rule defined for the {group} bonus group")]
    UnsupportedAggregation { group: BonusGroup },

    /// Ability code outside the six-symbol set.
    #[error("invalid ability code: {0:?}")]
    InvalidAbility(String),

    /// Skill points must be invested in non-negative amounts.
    #[error("cannot invest a negative amount of skill points: {0}")]
    NegativePoints(i32),

    /// Skill name not present in the roster.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// Skill name already present in the roster.
    #[error("skill already in roster: {0}")]
    DuplicateSkill(String),

    /// The roster's point pool cannot cover the investment.
    #[error("insufficient skill points: requested {requested}, available {available}")]
    InsufficientPoints { requested: Halves, available: Halves },
}

impl RulesError for SheetError {
    fn severity(&self) -> ErrorSeverity {
        use SheetError::*;
        match self {
            UnsupportedAggregation { .. } => ErrorSeverity::Internal,
            InvalidAbility(_) | NegativePoints(_) => ErrorSeverity::Validation,
            UnknownSkill(_) | DuplicateSkill(_) => ErrorSeverity::Validation,
            InsufficientPoints { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use SheetError::*;
        match self {
            UnsupportedAggregation { .. } => "BONUS_UNSUPPORTED_AGGREGATION",
            InvalidAbility(_) => "SKILL_INVALID_ABILITY",
            NegativePoints(_) => "SKILL_NEGATIVE_POINTS",
            UnknownSkill(_) => "ROSTER_UNKNOWN_SKILL",
            DuplicateSkill(_) => "ROSTER_DUPLICATE_SKILL",
            InsufficientPoints { .. } => "ROSTER_INSUFFICIENT_POINTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_matches_recoverability() {
        let err = SheetError::InsufficientPoints {
            requested: Halves::from_whole(4),
            available: Halves::from_whole(1),
        };
        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "ROSTER_INSUFFICIENT_POINTS");

        let err = SheetError::UnsupportedAggregation {
            group: BonusGroup::Other,
        };
        assert!(err.severity().is_internal());
        assert_eq!(err.severity().as_str(), "internal");
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            SheetError::InvalidAbility("Luk".into()).to_string(),
            "invalid ability code: \"Luk\""
        );
        assert_eq!(
            SheetError::UnsupportedAggregation {
                group: BonusGroup::Other
            }
            .to_string(),
            "no stacking rule defined for the Other bonus group"
        );
        assert_eq!(
            SheetError::InsufficientPoints {
                requested: Halves::from_whole(3),
                available: Halves::from_halves(3),
            }
            .to_string(),
            "insufficient skill points: requested 3, available 1.5"
        );
    }
}
