//! Training observer that reports roster events through `tracing`.

use sheet_core::{Skill, SkillPoints, TrainingObserver};

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl TrainingObserver for TracingObserver {
    fn ranks_invested(&self, skill: &Skill, overflow: SkillPoints) {
        tracing::info!("{} now has {} ranks.", skill.name(), skill.ranks());
        if !overflow.is_zero() {
            tracing::debug!("{} left {} points unspent", skill.name(), overflow);
        }
    }

    fn class_skill_toggled(&self, skill: &Skill) {
        tracing::debug!(
            "{}: class skill {} max ranks {}",
            skill.name(),
            skill.is_class_skill(),
            skill.max_ranks()
        );
    }

    fn untrained_toggled(&self, skill: &Skill) {
        tracing::info!(
            "The skill {} is usable untrained: {}",
            skill.name(),
            skill.uses_untrained()
        );
    }

    fn level_changed(&self, level: u32) {
        tracing::info!("Character level is now {}", level);
    }

    fn duplicate_skill(&self, name: &str) {
        tracing::warn!("Skill {} already in roster", name);
    }
}
