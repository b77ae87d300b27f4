//! Deterministic character-sheet rules shared by loaders and clients.
//!
//! `sheet-core` defines the canonical skill-training and bonus-stacking rules
//! and exposes pure APIs with no I/O. Skill state changes flow through
//! [`skill::Skill`], and a character's full skill list lives in
//! [`roster::SkillRoster`].
pub mod ability;
pub mod bonus;
pub mod config;
pub mod error;
pub mod observer;
pub mod roster;
pub mod skill;
pub mod units;

pub use ability::Ability;
pub use bonus::{BonusAggregate, BonusCategory, BonusGroup};
pub use config::RulesConfig;
pub use error::{ErrorSeverity, RulesError, SheetError};
pub use observer::{NoopObserver, TrainingObserver};
pub use roster::SkillRoster;
pub use skill::{Skill, SkillOptions};
pub use units::{Halves, Ranks, SkillPoints};
