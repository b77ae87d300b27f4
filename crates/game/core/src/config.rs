/// Rules constants and tunable roster parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RulesConfig {
    /// Character level a freshly built roster starts at.
    pub starting_level: u32,
    /// Skills marked as class skills when a roster is seeded.
    pub class_skills: Vec<String>,
}

impl RulesConfig {
    // ===== ruleset constants =====
    /// Ceiling offset: a class skill caps at `level + 3` ranks.
    pub const RANK_CEILING_OFFSET: u32 = 3;
    /// Points per rank for a class skill.
    pub const CLASS_SKILL_COST: u32 = 1;
    /// Points per rank for a cross-class skill.
    pub const CROSS_CLASS_COST: u32 = 2;
    /// Size adjustment applied when a skill's size flag is set.
    pub const DEFAULT_SIZE_MODIFIER: i32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_LEVEL: u32 = 1;

    pub fn new() -> Self {
        Self {
            starting_level: Self::DEFAULT_STARTING_LEVEL,
            class_skills: Vec::new(),
        }
    }

    pub fn with_starting_level(mut self, starting_level: u32) -> Self {
        self.starting_level = starting_level;
        self
    }

    pub fn with_class_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_skills = names.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
