//! Typed-bonus aggregation with group-specific stacking.
//!
//! A [`BonusAggregate`] holds one slot per bonus category plus a list of
//! dodge bonuses, and resolves a total for the usage group it belongs to.
//!
//! # Stacking Policy
//!
//! ```text
//! discrete  = circumstance + competence + insight + luck + morale + profane + sacred
//!
//! Armor     = armor + natural_armor + enhancement + deflection + shield + Σdodge + discrete
//! Weapon    = ability_modifier + enhancement + racial + size + discrete
//! Skill     = ability_modifier + racial + discrete
//! Other     = unsupported
//! (unset)   = no value
//! ```
//!
//! Discrete categories always stack. Typed categories only count inside the
//! groups where they mean something. Alchemical and resistance bonuses are
//! stored but belong to no group total yet. Sums saturate at the `i32` bounds.

use strum::EnumCount;

use crate::error::SheetError;

/// Bonus categories with a single overwritable slot.
///
/// Dodge is not listed: dodge bonuses always stack and live in their own list.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BonusCategory {
    AbilityModifier,
    Alchemical,
    Armor,
    Circumstance,
    Competence,
    Deflection,
    Enhancement,
    Insight,
    Luck,
    Morale,
    NaturalArmor,
    Profane,
    Racial,
    Resistance,
    Sacred,
    Shield,
    Size,
}

impl BonusCategory {
    /// Categories that stack by ruleset convention in every group.
    pub const DISCRETE: [BonusCategory; 7] = [
        Self::Circumstance,
        Self::Competence,
        Self::Insight,
        Self::Luck,
        Self::Morale,
        Self::Profane,
        Self::Sacred,
    ];

    /// Returns true if this category is summed regardless of group.
    pub fn is_discrete(self) -> bool {
        Self::DISCRETE.contains(&self)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Usage context that selects which categories participate in a total.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum BonusGroup {
    Armor,
    Weapon,
    Skill,
    /// Placeholder context with no stacking rule yet.
    Other,
}

/// Container of typed bonuses for a single usage context.
///
/// # Example
/// ```
/// # use sheet_core::bonus::{BonusAggregate, BonusCategory, BonusGroup};
/// let mut ac = BonusAggregate::new("chain shirt").with_group(BonusGroup::Armor);
/// ac.set_category(BonusCategory::Armor, 4);
/// ac.set_category(BonusCategory::Enhancement, 1);
/// ac.add_dodge(1);
/// ac.set_category(BonusCategory::Luck, 1);
///
/// // 4 + 1 + 1 (dodge) + 1 (luck)
/// assert_eq!(ac.total(), Ok(Some(7)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusAggregate {
    name: String,
    slots: [i32; BonusCategory::COUNT],
    dodge: Vec<i32>,
    group: Option<BonusGroup>,
}

impl BonusAggregate {
    /// Creates an empty aggregate with no usage group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the usage group (builder pattern).
    #[must_use]
    pub fn with_group(mut self, group: BonusGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<BonusGroup> {
        self.group
    }

    pub fn set_group(&mut self, group: Option<BonusGroup>) {
        self.group = group;
    }

    /// Overwrites a category slot.
    pub fn set_category(&mut self, category: BonusCategory, value: i32) {
        self.slots[category.index()] = value;
    }

    pub fn category(&self, category: BonusCategory) -> i32 {
        self.slots[category.index()]
    }

    /// Appends an independent dodge bonus.
    pub fn add_dodge(&mut self, value: i32) {
        self.dodge.push(value);
    }

    pub fn dodge(&self) -> &[i32] {
        &self.dodge
    }

    /// Sum of the categories that stack in every group.
    pub fn discrete_sum(&self) -> i32 {
        stack(BonusCategory::DISCRETE.map(|category| self.category(category)))
    }

    /// Armor group total.
    pub fn armor_total(&self) -> i32 {
        use BonusCategory::*;
        stack(
            [
                self.category(Armor),
                self.category(NaturalArmor),
                self.category(Enhancement),
                self.category(Deflection),
                self.category(Shield),
                self.discrete_sum(),
            ]
            .into_iter()
            .chain(self.dodge.iter().copied()),
        )
    }

    /// Weapon group total.
    pub fn weapon_total(&self) -> i32 {
        use BonusCategory::*;
        stack([
            self.category(AbilityModifier),
            self.category(Enhancement),
            self.category(Racial),
            self.category(Size),
            self.discrete_sum(),
        ])
    }

    /// Skill group total.
    pub fn skill_total(&self) -> i32 {
        use BonusCategory::*;
        stack([
            self.category(AbilityModifier),
            self.category(Racial),
            self.discrete_sum(),
        ])
    }

    /// Total for the configured group.
    ///
    /// # Returns
    /// - `Ok(Some(total))` for Armor, Weapon and Skill
    /// - `Ok(None)` when no group is set
    /// - `Err(SheetError::UnsupportedAggregation)` for [`BonusGroup::Other`]
    pub fn total(&self) -> Result<Option<i32>, SheetError> {
        match self.group {
            None => Ok(None),
            Some(BonusGroup::Armor) => Ok(Some(self.armor_total())),
            Some(BonusGroup::Weapon) => Ok(Some(self.weapon_total())),
            Some(BonusGroup::Skill) => Ok(Some(self.skill_total())),
            Some(group @ BonusGroup::Other) => Err(SheetError::UnsupportedAggregation { group }),
        }
    }
}

fn stack(values: impl IntoIterator<Item = i32>) -> i32 {
    values.into_iter().fold(0, i32::saturating_add)
}
