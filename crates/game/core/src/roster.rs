//! Skill roster: the named collection of one character's skills.
//!
//! The roster keeps skills in registry order, broadcasts level changes to
//! every rank ceiling, and tracks the skill-point pool that investments draw
//! from. All notifications go to the roster's [`TrainingObserver`].

use core::fmt;
use std::collections::HashMap;

use crate::config::RulesConfig;
use crate::error::SheetError;
use crate::observer::{NoopObserver, TrainingObserver};
use crate::skill::Skill;
use crate::units::{Halves, SkillPoints};

/// Width the skill name is padded to when rendering a roster.
const NAME_COLUMN_WIDTH: usize = 20;

pub struct SkillRoster {
    skills: HashMap<String, Skill>,
    order: Vec<String>,
    level: u32,
    points_available: SkillPoints,
    points_spent: SkillPoints,
    observer: Box<dyn TrainingObserver>,
}

impl SkillRoster {
    /// Creates an empty roster at the configured starting level.
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            skills: HashMap::new(),
            order: Vec::new(),
            level: config.starting_level,
            points_available: Halves::ZERO,
            points_spent: Halves::ZERO,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replaces the observer (builder pattern).
    #[must_use]
    pub fn with_observer(mut self, observer: impl TrainingObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn points_available(&self) -> SkillPoints {
        self.points_available
    }

    pub fn points_spent(&self) -> SkillPoints {
        self.points_spent
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.get_mut(name)
    }

    /// Skills in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> + '_ {
        self.order.iter().filter_map(|name| self.skills.get(name))
    }

    /// Appends a skill in seeding order, aligning its ceiling to the roster level.
    pub fn register(&mut self, mut skill: Skill) -> Result<(), SheetError> {
        if self.skills.contains_key(skill.name()) {
            self.observer.duplicate_skill(skill.name());
            return Err(SheetError::DuplicateSkill(skill.name().to_owned()));
        }

        skill.set_max_ranks(self.level);
        self.order.push(skill.name().to_owned());
        self.skills.insert(skill.name().to_owned(), skill);
        Ok(())
    }

    /// Adds a custom skill and re-sorts the registry alphabetically.
    pub fn add_skill(&mut self, skill: Skill) -> Result<(), SheetError> {
        self.register(skill)?;
        self.order.sort();
        Ok(())
    }

    /// Marks every named skill as a class skill.
    ///
    /// Skills that already are class skills are left alone. Names are
    /// checked up front, so an unknown name leaves the roster unchanged.
    pub fn set_class_skills<I, S>(&mut self, names: I) -> Result<(), SheetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        for name in &names {
            let name: &str = name.as_ref();
            if !self.contains(name) {
                return Err(SheetError::UnknownSkill(name.to_owned()));
            }
        }

        for name in &names {
            let name: &str = name.as_ref();
            if let Some(skill) = self.skills.get_mut(name) {
                if !skill.is_class_skill() {
                    skill.toggle_class_skill();
                    self.observer.class_skill_toggled(skill);
                }
            }
        }
        Ok(())
    }

    pub fn toggle_class_skill(&mut self, name: &str) -> Result<(), SheetError> {
        let skill = lookup(&mut self.skills, name)?;
        skill.toggle_class_skill();
        self.observer.class_skill_toggled(skill);
        Ok(())
    }

    pub fn toggle_untrained(&mut self, name: &str) -> Result<(), SheetError> {
        let skill = lookup(&mut self.skills, name)?;
        skill.toggle_untrained();
        self.observer.untrained_toggled(skill);
        Ok(())
    }

    /// Broadcasts a character level to every skill's rank ceiling.
    pub fn set_max_ranks(&mut self, level: u32) {
        self.level = level;
        for skill in self.skills.values_mut() {
            skill.set_max_ranks(level);
        }
        self.observer.level_changed(level);
    }

    /// Adds points to the pool without changing level.
    ///
    /// The pool saturates rather than wrapping.
    pub fn grant_points(&mut self, points: u32) {
        self.points_available += Halves::from_whole(points);
    }

    /// Advances one character level and adds the level's skill points.
    ///
    /// A roster already at `u32::MAX` stays there.
    pub fn go_up_a_level(&mut self, points_gained: u32) {
        self.set_max_ranks(self.level.saturating_add(1));
        self.grant_points(points_gained);
    }

    /// Invests pooled points into a skill and returns the overflow.
    ///
    /// Overflow stays in the pool; only the points that bought ranks move to
    /// the spent tally.
    ///
    /// # Errors
    /// - [`SheetError::NegativePoints`] for a negative amount
    /// - [`SheetError::InsufficientPoints`] when the pool is too small
    /// - [`SheetError::UnknownSkill`] when no skill has this name
    pub fn invest(&mut self, name: &str, points: i32) -> Result<SkillPoints, SheetError> {
        let requested = u32::try_from(points)
            .map(Halves::from_whole)
            .map_err(|_| SheetError::NegativePoints(points))?;
        if requested > self.points_available {
            return Err(SheetError::InsufficientPoints {
                requested,
                available: self.points_available,
            });
        }

        let skill = lookup(&mut self.skills, name)?;
        let overflow = skill.invest_points(points)?;

        self.points_available = self.points_available - requested + overflow;
        self.points_spent = (self.points_spent + requested).saturating_sub(overflow);
        self.observer.ranks_invested(skill, overflow);
        Ok(overflow)
    }
}

fn lookup<'a>(
    skills: &'a mut HashMap<String, Skill>,
    name: &str,
) -> Result<&'a mut Skill, SheetError> {
    skills
        .get_mut(name)
        .ok_or_else(|| SheetError::UnknownSkill(name.to_owned()))
}

impl fmt::Debug for SkillRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillRoster")
            .field("order", &self.order)
            .field("level", &self.level)
            .field("points_available", &self.points_available)
            .field("points_spent", &self.points_spent)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SkillRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for skill in self.iter() {
            let bonus = skill.bonus().map(|b| b.to_string()).unwrap_or_default();
            writeln!(
                f,
                "Name : {:<width$}\tBonus : {}\tClass Skill: : {}",
                skill.name(),
                bonus,
                skill.is_class_skill(),
                width = NAME_COLUMN_WIDTH,
            )?;
        }
        Ok(())
    }
}
