// SPDX-License-Identifier: MPL-2.0
//! The built-in message catalog.
//!
//! UI strings ship inside the binary as one TOML file per locale under
//! `locales/` (the file stem is the locale tag). [`load`] parses them into
//! a [`MessageTable`]; [`default_provider`] wires the table with the
//! game's shipped configuration: Chinese active, English fallback.

use crate::error::{Error, Result};
use crate::provider::{LocalizedStringProvider, MessageTable};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Asset;

/// Locale the game starts in.
pub const DEFAULT_LOCALE: &str = "zh";

/// Locale consulted when the active locale is missing a key.
pub const FALLBACK_LOCALE: &str = "en";

/// Parses every embedded locale file into a message table.
pub fn load() -> Result<MessageTable> {
    let mut table = MessageTable::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(stem) = filename.strip_suffix(".toml") else {
            continue;
        };
        let locale: LanguageIdentifier = stem.parse().map_err(|_| {
            Error::Catalog(format!("invalid locale tag in file name '{}'", filename))
        })?;
        let content = Asset::get(filename)
            .ok_or_else(|| Error::Catalog(format!("embedded file '{}' unreadable", filename)))?;
        let text = String::from_utf8_lossy(content.data.as_ref());
        let messages: HashMap<String, String> = toml::from_str(&text)
            .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
        table.insert(locale, messages);
    }

    Ok(table)
}

/// Builds a provider over the embedded catalog with the shipped
/// active/fallback locales.
pub fn default_provider() -> Result<LocalizedStringProvider> {
    let active = parse_locale(DEFAULT_LOCALE)?;
    let fallback = parse_locale(FALLBACK_LOCALE)?;
    LocalizedStringProvider::new(load()?, active, fallback)
}

fn parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    tag.parse()
        .map_err(|_| Error::Catalog(format!("invalid locale tag '{}'", tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_contains_both_locales() {
        let table = load().expect("embedded catalog parses");
        let en: LanguageIdentifier = "en".parse().unwrap();
        let zh: LanguageIdentifier = "zh".parse().unwrap();
        assert!(table.contains_key(&en));
        assert!(table.contains_key(&zh));
    }

    #[test]
    fn fallback_locale_covers_every_shipped_key() {
        let table = load().expect("embedded catalog parses");
        let en = &table[&"en".parse::<LanguageIdentifier>().unwrap()];
        for (locale, messages) in &table {
            for key in messages.keys() {
                assert!(
                    en.contains_key(key),
                    "key '{}' from locale '{}' is missing in the fallback",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn default_provider_starts_in_chinese_with_english_fallback() {
        let provider = default_provider().expect("default provider builds");
        assert_eq!(provider.active_locale().to_string(), "zh");
        assert_eq!(provider.fallback_locale().to_string(), "en");
        assert_eq!(provider.resolve("title").unwrap(), "贪吃蛇游戏");
    }

    #[test]
    fn score_renders_in_both_locales() {
        let mut provider = default_provider().expect("default provider builds");
        let params = [("score", 5.into())];
        assert_eq!(provider.resolve_with("score", &params).unwrap(), "分数: 5");
        provider.set_active_locale("en".parse().unwrap());
        assert_eq!(provider.resolve_with("score", &params).unwrap(), "Score: 5");
    }

    #[test]
    fn gamepad_status_strings_are_present() {
        let provider = default_provider().expect("default provider builds");
        assert_eq!(provider.resolve("gamepad-connected").unwrap(), "游戏手柄已连接");
        assert_eq!(
            provider.resolve("gamepad-disconnected").unwrap(),
            "未检测到游戏手柄"
        );
    }
}
