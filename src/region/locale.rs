//! Extraction of the region part from POSIX and BCP 47 style locale names.

use std::env;

/// Locale variables in order of precedence.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// region_code_from_locale returns uppercase two letter region code of given locale.
///
/// Both `en_US.UTF-8` and `zh-Hant-TW` styles are understood.
/// `None` is returned for locales without region like `C`, `POSIX` or `de`
/// and for numeric areas like `es-419`.
pub fn region_code_from_locale(locale: &str) -> Option<String> {
    let locale = locale.trim();
    // drop codeset and modifier: `de_DE.ISO-8859-15@euro`
    let end = locale.find(|c: char| c == '.' || c == '@').unwrap_or_else(|| locale.len());
    let locale = &locale[..end];
    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }

    // first subtag is always language
    for subtag in locale.split(|c: char| c == '_' || c == '-').skip(1) {
        let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
        match subtag.len() {
            2 if is_alpha => return Some(subtag.to_ascii_uppercase()),
            // script like `Hant` or `Latn`, region may follow
            4 if is_alpha => continue,
            _ => return None,
        }
    }
    None
}

/// current_region_code checks `LC_ALL`, `LC_MESSAGES` and `LANG` and returns first region found.
pub fn current_region_code() -> Option<String> {
    region_code_from_vars(|name| env::var(name).ok())
}

fn region_code_from_vars<F>(var: F) -> Option<String>
    where F: Fn(&str) -> Option<String>
{
    LOCALE_VARS.iter()
        .filter_map(|name| var(*name))
        .filter_map(|value| region_code_from_locale(&value))
        .next()
}
