/*!
 * Tests for UI string lookup and its fallback chain
 */

use clinic_content::i18n::{lookup, missing_keys, supported_locales, PRIMARY_LOCALE, SECONDARY_LOCALE};

#[test]
fn test_lookup_withMissingKey_shouldReturnKey() {
    assert_eq!(lookup("en", "missingKey"), "missingKey");
    assert_eq!(lookup("tr", "missingKey"), "missingKey");
    assert_eq!(lookup("en", ""), "");
}

#[test]
fn test_lookup_withKnownKey_shouldUseLocaleDictionary() {
    assert_eq!(lookup("en", "nav.contact"), "Contact");
    assert_eq!(lookup("tr", "nav.contact"), "İletişim");
}

#[test]
fn test_lookup_withUnrecognizedLocale_shouldUsePrimaryDictionary() {
    let primary = lookup(PRIMARY_LOCALE, "nav.home");
    assert_eq!(lookup("xx", "nav.home"), primary);
    assert_eq!(lookup("", "nav.home"), primary);
}

#[test]
fn test_lookup_withSecondaryVariants_shouldOnlyMatchExactTag() {
    let primary = lookup(PRIMARY_LOCALE, "nav.home");
    assert_eq!(lookup("TR", "nav.home"), primary);
    assert_eq!(lookup("tr-TR", "nav.home"), primary);
    assert_ne!(lookup(SECONDARY_LOCALE, "nav.home"), primary);
}

#[test]
fn test_dictionaries_shouldTranslateEveryPrimaryKey() {
    for locale in supported_locales() {
        let missing = missing_keys(locale);
        assert!(missing.is_empty(), "{} is missing keys: {:?}", locale, missing);
    }
}
