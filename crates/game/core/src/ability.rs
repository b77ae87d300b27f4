//! The six ability scores a skill can key off.

use core::str::FromStr;

use crate::error::SheetError;

/// Ability a skill derives its modifier from.
///
/// Codes are the three-letter abbreviations used on the character sheet
/// (`Str`, `Dex`, `Con`, `Int`, `Wis`, `Cha`), parsed case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Ability {
    /// Strength - Climb, Jump, Swim
    Str,
    /// Dexterity - Balance, Hide, Tumble and most fine-motor skills
    Dex,
    /// Constitution - Concentration
    Con,
    /// Intelligence - Appraise, Craft, Knowledge, Search, Spellcraft
    Int,
    /// Wisdom - Heal, Listen, Sense Motive, Spot, Survival
    Wis,
    /// Charisma - Bluff, Diplomacy, Intimidate, Perform
    Cha,
}

impl Ability {
    /// Parses an ability code, rejecting anything outside the six codes.
    pub fn parse(code: &str) -> Result<Self, SheetError> {
        Self::from_str(code.trim()).map_err(|_| SheetError::InvalidAbility(code.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Ability::parse("Int"), Ok(Ability::Int));
        assert_eq!(Ability::parse("cha"), Ok(Ability::Cha));
        assert_eq!(Ability::parse(" DEX "), Ok(Ability::Dex));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            Ability::parse("Luk"),
            Err(SheetError::InvalidAbility("Luk".into()))
        );
        assert!(Ability::parse("").is_err());
    }

    #[test]
    fn display_round_trips_every_code() {
        for ability in Ability::iter() {
            assert_eq!(Ability::parse(ability.as_ref()), Ok(ability));
        }
        assert_eq!(Ability::iter().count(), 6);
    }
}
