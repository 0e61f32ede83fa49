// SPDX-License-Identifier: MPL-2.0
//! Startup locale resolution.

use crate::config::Config;
use unic_langid::LanguageIdentifier;

/// Picks the locale the application should start in.
///
/// Sources are tried in priority order, each accepted only when it parses
/// and is one of `available`:
///
/// 1. An explicit override from the host (e.g. a settings screen or CLI).
/// 2. The saved configuration's `language`.
/// 3. The operating system locale.
///
/// Returns `None` when no source yields an available locale; the caller
/// then keeps the catalog default.
pub fn resolve(
    requested: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Host override
    if let Some(lang_str) = requested {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Saved config
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
