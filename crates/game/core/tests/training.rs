use sheet_core::{
    Ability, BonusAggregate, BonusCategory, BonusGroup, Halves, RulesConfig, SheetError, Skill,
    SkillOptions, SkillRoster,
};

/// Deterministic mix of investments, level changes and toggles.
const SCRIPT: &[(u32, i32, bool)] = &[
    (1, 3, false),
    (1, 2, false),
    (2, 1, true),
    (2, 4, false),
    (4, 0, true),
    (1, 5, false),
    (6, 7, true),
    (3, 1, false),
    (3, 9, true),
];

#[test]
fn ranks_stay_within_ceiling_after_every_investment() {
    for class_skill in [false, true] {
        let mut skill = Skill::new(
            "Search",
            Ability::Int,
            SkillOptions::new().class_skill(class_skill),
        );

        for &(level, points, toggle) in SCRIPT {
            skill.set_max_ranks(level);
            if toggle {
                skill.toggle_class_skill();
            }
            skill.invest_points(points).unwrap();
            assert!(
                skill.ranks() <= skill.max_ranks(),
                "{} above ceiling after investing {points} at level {level}",
                skill
            );
        }
    }
}

#[test]
fn investment_conserves_points_below_the_old_ceiling() {
    for class_skill in [false, true] {
        let mut skill = Skill::new(
            "Listen",
            Ability::Wis,
            SkillOptions::new().class_skill(class_skill).level(4),
        );

        for points in [0, 1, 3, 2, 5, 4] {
            let before = skill.ranks();
            let overflow = skill.invest_points(points).unwrap();
            let gained = skill.ranks() - before;

            // ranks bought × cost + overflow == points requested
            assert_eq!(
                gained.scale(skill.rank_cost()) + overflow,
                Halves::from_whole(points as u32)
            );
        }
    }
}

#[test]
fn set_max_ranks_is_idempotent() {
    let mut skill = Skill::new("Ride", Ability::Dex, SkillOptions::default());
    for level in 1..=20 {
        skill.set_max_ranks(level);
        let first = skill.max_ranks();
        skill.set_max_ranks(level);
        assert_eq!(skill.max_ranks(), first);
    }
}

#[test]
fn scenario_cross_class_training_at_level_one() {
    let mut skill = Skill::new("Appraise", Ability::Int, SkillOptions::default());
    assert_eq!(skill.max_ranks(), Halves::from_whole(2));

    assert_eq!(skill.invest_points(3), Ok(Halves::ZERO));
    assert_eq!(skill.ranks(), Halves::from_halves(3));
    assert_eq!(skill.bonus(), Some(1));

    assert_eq!(skill.invest_points(2), Ok(Halves::from_whole(1)));
    assert_eq!(skill.ranks(), Halves::from_whole(2));
}

#[test]
fn scenario_untrained_skill_without_ranks_has_no_bonus() {
    let skill = Skill::new(
        "Decipher Script",
        Ability::Int,
        SkillOptions::new().use_untrained(false),
    );
    assert_eq!(skill.bonus(), None);
}

#[test]
fn scenario_class_skill_toggle_doubles_and_halves_ceiling() {
    let mut skill = Skill::new("Bluff", Ability::Cha, SkillOptions::default());
    assert_eq!(skill.max_ranks(), Halves::from_whole(2));
    skill.toggle_class_skill();
    assert_eq!(skill.max_ranks(), Halves::from_whole(4));
    skill.toggle_class_skill();
    assert_eq!(skill.max_ranks(), Halves::from_whole(2));
}

#[test]
fn toggles_do_not_drift_across_level_changes() {
    let mut skill = Skill::new("Jump", Ability::Str, SkillOptions::default());
    skill.toggle_class_skill();
    skill.set_max_ranks(5);
    skill.toggle_class_skill();
    // cross-class at level 5: (5 + 3) / 2
    assert_eq!(skill.max_ranks(), Halves::from_whole(4));
    skill.toggle_class_skill();
    assert_eq!(skill.max_ranks(), Halves::from_whole(8));
}

#[test]
fn scenario_armor_total() {
    let mut ac = BonusAggregate::new("armor class").with_group(BonusGroup::Armor);
    ac.set_category(BonusCategory::Armor, 4);
    ac.set_category(BonusCategory::NaturalArmor, 1);
    ac.set_category(BonusCategory::Enhancement, 1);
    ac.add_dodge(1);
    ac.add_dodge(1);
    assert_eq!(ac.total(), Ok(Some(8)));
}

#[test]
fn scenario_other_group_is_unsupported() {
    let bonus = BonusAggregate::new("initiative").with_group(BonusGroup::Other);
    assert_eq!(
        bonus.total(),
        Err(SheetError::UnsupportedAggregation {
            group: BonusGroup::Other
        })
    );
}

#[test]
fn skill_bonus_uses_the_skill_stacking_rule() {
    let skill = Skill::new(
        "Move Silently",
        Ability::Dex,
        SkillOptions::new().ability_modifier(2).misc_modifier(1),
    );
    let modifiers = skill.modifiers();
    assert_eq!(modifiers.group(), Some(BonusGroup::Skill));
    assert_eq!(modifiers.total(), Ok(skill.bonus()));
}

#[test]
fn roster_level_up_cycle() {
    let config = RulesConfig::default().with_class_skills(["Climb"]);
    let mut roster = SkillRoster::new(&config);
    for (name, ability) in [("Climb", Ability::Str), ("Swim", Ability::Str)] {
        roster
            .register(Skill::new(name, ability, SkillOptions::default()))
            .unwrap();
    }
    roster.set_class_skills(&config.class_skills).unwrap();
    roster.grant_points(8);

    assert_eq!(roster.invest("Climb", 6), Ok(Halves::from_whole(2)));
    assert_eq!(roster.get("Climb").unwrap().ranks(), Halves::from_whole(4));

    roster.go_up_a_level(2);
    assert_eq!(roster.points_available(), Halves::from_whole(6));
    assert_eq!(roster.invest("Climb", 3), Ok(Halves::from_whole(2)));
    assert_eq!(roster.get("Climb").unwrap().ranks(), Halves::from_whole(5));

    assert_eq!(roster.invest("Swim", 5), Ok(Halves::from_whole(0)));
    // level 2 cross-class ceiling is 2.5 ranks = 5 points
    assert_eq!(roster.get("Swim").unwrap().ranks(), Halves::from_halves(5));
    assert_eq!(roster.points_spent(), Halves::from_whole(10));
    assert_eq!(roster.points_available(), Halves::ZERO);
}
