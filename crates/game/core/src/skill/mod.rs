//! Skill entity: rank investment, training gates and the final check bonus.
//!
//! # Point Economy
//!
//! ```text
//! cost      = class_skill ? 1 : 2           (points per rank)
//! max_ranks = class_skill ? level + 3 : (level + 3) / 2
//!
//! capped    = max_ranks × cost
//! spent     = ranks × cost + points
//! ranks'    = min(capped, spent) / cost
//! overflow  = max(0, spent − capped)
//! ```
//!
//! Ranks and points are tracked in [`Halves`] so cross-class half ranks stay
//! exact.

mod options;

pub use options::SkillOptions;

use core::fmt;

use crate::ability::Ability;
use crate::bonus::{BonusAggregate, BonusCategory, BonusGroup};
use crate::config::RulesConfig;
use crate::error::SheetError;
use crate::units::{Halves, Ranks, SkillPoints};

/// A single trainable skill on a character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    name: String,
    ability: Ability,
    ranks: Ranks,
    max_ranks: Ranks,
    level: u32,
    ability_modifier: i32,
    misc_modifier: i32,
    size: bool,
    size_modifier: i32,
    armor_check_penalty_applies: bool,
    armor_check_penalty_modifier: i32,
    class_skill: bool,
    use_untrained: bool,
}

impl Skill {
    /// Creates an untrained skill with the given overrides applied.
    pub fn new(name: impl Into<String>, ability: Ability, options: SkillOptions) -> Self {
        let SkillOptions {
            ability_modifier,
            misc_modifier,
            size,
            size_modifier,
            armor_check_penalty_applies,
            armor_check_penalty_modifier,
            class_skill,
            use_untrained,
            level,
        } = options;

        Self {
            name: name.into(),
            ability,
            ranks: Halves::ZERO,
            max_ranks: rank_ceiling(level, class_skill),
            level,
            ability_modifier,
            misc_modifier,
            size,
            size_modifier,
            armor_check_penalty_applies,
            armor_check_penalty_modifier,
            class_skill,
            use_untrained,
        }
    }

    /// Like [`Skill::new`], parsing the ability from its three-letter code.
    pub fn parse(
        name: impl Into<String>,
        ability: &str,
        options: SkillOptions,
    ) -> Result<Self, SheetError> {
        Ok(Self::new(name, Ability::parse(ability)?, options))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ability(&self) -> Ability {
        self.ability
    }

    pub fn ranks(&self) -> Ranks {
        self.ranks
    }

    pub fn max_ranks(&self) -> Ranks {
        self.max_ranks
    }

    /// Character level the current ceiling was computed for.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_class_skill(&self) -> bool {
        self.class_skill
    }

    pub fn uses_untrained(&self) -> bool {
        self.use_untrained
    }

    pub fn ability_modifier(&self) -> i32 {
        self.ability_modifier
    }

    /// Loads the current modifier of the keyed ability.
    pub fn set_ability_modifier(&mut self, modifier: i32) {
        self.ability_modifier = modifier;
    }

    pub fn misc_modifier(&self) -> i32 {
        self.misc_modifier
    }

    pub fn set_misc_modifier(&mut self, modifier: i32) {
        self.misc_modifier = modifier;
    }

    /// Points one rank costs at the current class-skill status.
    pub fn rank_cost(&self) -> u32 {
        if self.class_skill {
            RulesConfig::CLASS_SKILL_COST
        } else {
            RulesConfig::CROSS_CLASS_COST
        }
    }

    /// Recomputes the rank ceiling for a character level.
    ///
    /// Ranks above a lowered ceiling are kept; the next investment clamps them.
    pub fn set_max_ranks(&mut self, level: u32) {
        self.level = level;
        self.max_ranks = rank_ceiling(level, self.class_skill);
    }

    /// Spends skill points on ranks and returns the points that did not fit
    /// under the ceiling.
    ///
    /// # Errors
    /// [`SheetError::NegativePoints`] if `points` is negative; the skill is
    /// left unchanged.
    pub fn invest_points(&mut self, points: i32) -> Result<SkillPoints, SheetError> {
        let points = u32::try_from(points).map_err(|_| SheetError::NegativePoints(points))?;
        let cost = self.rank_cost();

        let capped = self.max_ranks.scale(cost);
        let spent = self.ranks.scale(cost) + Halves::from_whole(points);

        self.ranks = capped.min(spent).unscale(cost);
        Ok(spent.saturating_sub(capped))
    }

    /// Check bonus, or `None` when the skill cannot be used untrained and has
    /// no ranks.
    ///
    /// The result truncates toward zero, so a trailing half rank only counts
    /// once it completes a whole point. Totals beyond `i32` clamp to its range.
    pub fn bonus(&self) -> Option<i32> {
        if !self.use_untrained && self.ranks.is_zero() {
            return None;
        }
        let ranks = i64::try_from(self.ranks.halves()).unwrap_or(i64::MAX);
        let halves = ranks.saturating_add(2 * i64::from(self.modifiers().skill_total()));
        Some((halves / 2).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// The skill's modifiers as a `Skill`-group aggregate.
    ///
    /// Ability modifier fills the ability slot, miscellaneous modifiers the
    /// racial slot, and size and armor check terms the circumstance slot.
    pub fn modifiers(&self) -> BonusAggregate {
        let size = if self.size { self.size_modifier } else { 0 };
        let armor_check = i32::from(self.armor_check_penalty_applies)
            .saturating_add(self.armor_check_penalty_modifier);

        let mut bonus = BonusAggregate::new(self.name.as_str()).with_group(BonusGroup::Skill);
        bonus.set_category(BonusCategory::AbilityModifier, self.ability_modifier);
        bonus.set_category(BonusCategory::Racial, self.misc_modifier);
        bonus.set_category(BonusCategory::Circumstance, size.saturating_add(armor_check));
        bonus
    }

    /// Flips class-skill status and recomputes the ceiling at the stored level.
    pub fn toggle_class_skill(&mut self) {
        self.class_skill = !self.class_skill;
        self.max_ranks = rank_ceiling(self.level, self.class_skill);
    }

    pub fn toggle_untrained(&mut self) {
        self.use_untrained = !self.use_untrained;
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is currently trained to {} ranks of maximum {}",
            self.name, self.ranks, self.max_ranks
        )
    }
}

fn rank_ceiling(level: u32, class_skill: bool) -> Ranks {
    let ceiling = u64::from(level) + u64::from(RulesConfig::RANK_CEILING_OFFSET);
    if class_skill {
        Halves::from_halves(ceiling * 2)
    } else {
        Halves::from_halves(ceiling)
    }
}
