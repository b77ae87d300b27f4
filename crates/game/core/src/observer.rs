//! Training notifications.
//!
//! A [`SkillRoster`](crate::roster::SkillRoster) reports every state change to
//! the observer it owns. The rules code never writes output on its own; the
//! embedding application decides whether to log, print or ignore.

use crate::skill::Skill;
use crate::units::SkillPoints;

/// Receiver for roster training events. Every method defaults to a no-op.
pub trait TrainingObserver {
    /// Points were invested into `skill`; `overflow` went unspent.
    fn ranks_invested(&self, _skill: &Skill, _overflow: SkillPoints) {}

    /// `skill` changed class-skill status.
    fn class_skill_toggled(&self, _skill: &Skill) {}

    /// `skill` changed untrained-use eligibility.
    fn untrained_toggled(&self, _skill: &Skill) {}

    /// The roster moved to a new character level.
    fn level_changed(&self, _level: u32) {}

    /// A skill with this name was already registered and was not added.
    fn duplicate_skill(&self, _name: &str) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {}
