//! Character classes that own armor.

/// Armor is class-bound; a loadout only ever mixes pieces of one class.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    Titan,
    Hunter,
    Warlock,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Titan,
        CharacterClass::Hunter,
        CharacterClass::Warlock,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("hunter".parse::<CharacterClass>(), Ok(CharacterClass::Hunter));
        assert_eq!("Warlock".parse::<CharacterClass>(), Ok(CharacterClass::Warlock));
        assert!("guardian".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(CharacterClass::Titan.to_string(), "titan");
    }
}
