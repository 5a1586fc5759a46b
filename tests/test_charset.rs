use pwforge::charset::*;
use pwforge::error::PassGenError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_universe_all_classes() {
        let config = CharsetConfig::default();
        let universe = build_universe(&config, &CharacterClass::ALL, false).unwrap();
        let expected = 26 + 26 + 10 + DEFAULT_SPECIAL_CHARS.len();
        assert_eq!(universe.chars().len(), expected);
        assert_eq!(universe.classes().len(), 4);
        assert_eq!(universe.required_count(), 4);
    }

    #[test]
    fn test_build_universe_canonical_order() {
        let config = CharsetConfig::default();
        let enabled = [CharacterClass::Special, CharacterClass::Digit, CharacterClass::Digit];
        let universe = build_universe(&config, &enabled, false).unwrap();
        let classes: Vec<CharacterClass> = universe.classes().iter().map(|(c, _)| *c).collect();
        assert_eq!(classes, vec![CharacterClass::Digit, CharacterClass::Special]);
        assert_eq!(universe.chars()[0], '0');
    }

    #[test]
    fn test_build_universe_strips_ambiguous() {
        let config = CharsetConfig::default();
        let universe = build_universe(&config, &CharacterClass::ALL, true).unwrap();
        for c in AMBIGUOUS_CHARS {
            assert!(!universe.chars().contains(&c), "universe still contains {:?}", c);
            for (_, members) in universe.classes() {
                assert!(!members.contains(&c));
            }
        }
        // 'o' is not in the ambiguous set
        assert!(universe.chars().contains(&'o'));
        assert_eq!(universe.chars().len(), 26 + 26 + 10 + DEFAULT_SPECIAL_CHARS.len() - 5);
    }

    #[test]
    fn test_build_universe_no_classes() {
        let config = CharsetConfig::default();
        let result = build_universe(&config, &[], false);
        assert!(matches!(result, Err(PassGenError::Configuration(_))));
    }

    #[test]
    fn test_build_universe_empty_after_stripping() {
        let config = CharsetConfig::with_custom_special("").unwrap();
        let result = build_universe(&config, &[CharacterClass::Special], true);
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_empty_class_is_not_required() {
        let config = CharsetConfig::with_custom_special("").unwrap();
        let universe = build_universe(
            &config,
            &[CharacterClass::Lowercase, CharacterClass::Special],
            false,
        ).unwrap();
        assert_eq!(universe.classes().len(), 2);
        assert_eq!(universe.required_count(), 1);
    }

    #[test]
    fn test_custom_special_dedup_and_order() {
        let config = CharsetConfig::with_custom_special("#!#@!").unwrap();
        assert_eq!(config.special(), &['#', '!', '@']);
    }

    #[test]
    fn test_custom_special_rejects_alphanumeric() {
        assert!(CharsetConfig::with_custom_special("!a").is_err());
        assert!(CharsetConfig::with_custom_special("é").is_err());
        assert!(CharsetConfig::with_custom_special("! ").is_err());
    }

    #[test]
    fn test_url_safe_special() {
        let config = CharsetConfig::url_safe();
        assert_eq!(config.special(), &['-', '.', '_', '~']);
        assert_eq!(config.members(CharacterClass::Uppercase).len(), 26);
    }
}
