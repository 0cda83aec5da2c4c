/*!
 * UI string lookup.
 *
 * Two flat key -> string dictionaries are bundled into the binary and parsed
 * once on first use. Lookup never fails: an unrecognized locale resolves to
 * the primary dictionary and a missing key resolves to the key itself.
 */

use std::collections::HashMap;
use once_cell::sync::Lazy;
use log::error;

/// Primary locale, used for anything that is not exactly `SECONDARY_LOCALE`
pub const PRIMARY_LOCALE: &str = "en";

/// The only other bundled locale
pub const SECONDARY_LOCALE: &str = "tr";

type Dictionary = HashMap<String, String>;

static PRIMARY: Lazy<Dictionary> = Lazy::new(|| parse_bundled(PRIMARY_LOCALE, include_str!("../locales/en.json")));
static SECONDARY: Lazy<Dictionary> = Lazy::new(|| parse_bundled(SECONDARY_LOCALE, include_str!("../locales/tr.json")));

fn parse_bundled(locale: &str, raw: &str) -> Dictionary {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        // An empty dictionary still satisfies the identity fallback
        error!("Bundled {} translations are not valid JSON: {}", locale, e);
        Dictionary::new()
    })
}

fn dictionary(locale: &str) -> &'static Dictionary {
    if locale == SECONDARY_LOCALE {
        &*SECONDARY
    } else {
        &*PRIMARY
    }
}

/// Resolve `key` for `locale`.
///
/// Only the exact secondary tag selects the secondary dictionary, so `"tr-TR"`
/// or `"TR"` resolve to the primary one. Unknown keys come back unchanged.
pub fn lookup<'a>(locale: &str, key: &'a str) -> &'a str {
    match dictionary(locale).get(key) {
        Some(value) => value.as_str(),
        None => key,
    }
}

/// Locales with a bundled dictionary
pub fn supported_locales() -> [&'static str; 2] {
    [PRIMARY_LOCALE, SECONDARY_LOCALE]
}

pub fn is_supported(locale: &str) -> bool {
    supported_locales().contains(&locale)
}

/// Keys of the primary dictionary that `locale` does not translate
pub fn missing_keys(locale: &str) -> Vec<&'static str> {
    let target = dictionary(locale);
    let mut missing: Vec<&'static str> = PRIMARY
        .keys()
        .filter(|key| !target.contains_key(*key))
        .map(String::as_str)
        .collect();
    missing.sort_unstable();
    missing
}
