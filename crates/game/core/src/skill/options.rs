//! Construction options for [`Skill`](super::Skill).

use crate::config::RulesConfig;

/// Every recognized skill override, with neutral defaults.
///
/// When deserialized, unknown keys are rejected so a typo never turns into a
/// silently ignored field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SkillOptions {
    /// Modifier of the keyed ability.
    pub ability_modifier: i32,
    /// Miscellaneous modifiers such as a racial bonus.
    pub misc_modifier: i32,
    /// Whether the size adjustment applies.
    pub size: bool,
    pub size_modifier: i32,
    /// Whether armor check penalty applies.
    pub armor_check_penalty_applies: bool,
    pub armor_check_penalty_modifier: i32,
    pub class_skill: bool,
    pub use_untrained: bool,
    /// Character level the rank ceiling is computed for.
    pub level: u32,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self {
            ability_modifier: 0,
            misc_modifier: 0,
            size: false,
            size_modifier: RulesConfig::DEFAULT_SIZE_MODIFIER,
            armor_check_penalty_applies: false,
            armor_check_penalty_modifier: 0,
            class_skill: false,
            use_untrained: true,
            level: RulesConfig::DEFAULT_STARTING_LEVEL,
        }
    }
}

impl SkillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ability_modifier(mut self, value: i32) -> Self {
        self.ability_modifier = value;
        self
    }

    #[must_use]
    pub fn misc_modifier(mut self, value: i32) -> Self {
        self.misc_modifier = value;
        self
    }

    /// Applies the size adjustment with the given per-size modifier.
    #[must_use]
    pub fn sized(mut self, size_modifier: i32) -> Self {
        self.size = true;
        self.size_modifier = size_modifier;
        self
    }

    /// Applies armor check penalty with the given modifier.
    #[must_use]
    pub fn armor_check_penalty(mut self, modifier: i32) -> Self {
        self.armor_check_penalty_applies = true;
        self.armor_check_penalty_modifier = modifier;
        self
    }

    #[must_use]
    pub fn class_skill(mut self, class_skill: bool) -> Self {
        self.class_skill = class_skill;
        self
    }

    #[must_use]
    pub fn use_untrained(mut self, use_untrained: bool) -> Self {
        self.use_untrained = use_untrained;
        self
    }

    #[must_use]
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}
