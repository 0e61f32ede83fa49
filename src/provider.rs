// SPDX-License-Identifier: MPL-2.0
//! The core localized string provider.
//!
//! A [`LocalizedStringProvider`] owns a message table, an active locale,
//! and a fallback locale. Lookups try the active locale first, then the
//! fallback; `{name}` placeholders in the stored template are substituted
//! from the parameters supplied at render time.
//!
//! The provider is a plain owned value, not process-global state: hosts
//! that need several independent locales (split-screen UI, tests) simply
//! hold several providers.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Messages for all locales: locale -> key -> template.
pub type MessageTable = HashMap<LanguageIdentifier, HashMap<String, String>>;

/// A value substituted into a `{name}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Named parameters for one `resolve` call, in call-site order.
pub type Params<'a> = [(&'a str, ParamValue)];

#[derive(Debug, Clone)]
pub struct LocalizedStringProvider {
    table: MessageTable,
    active_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl LocalizedStringProvider {
    /// Builds a provider over `table`.
    ///
    /// Fails with [`Error::Config`] when the fallback locale has no entry
    /// in the table; a fallback that cannot serve lookups would defeat
    /// its purpose, so this is checked once at startup. The active locale
    /// is unconstrained — an unknown active locale just means every
    /// lookup falls back.
    pub fn new(
        table: MessageTable,
        active_locale: LanguageIdentifier,
        fallback_locale: LanguageIdentifier,
    ) -> Result<Self> {
        if !table.contains_key(&fallback_locale) {
            return Err(Error::Config(format!(
                "fallback locale '{}' has no message table",
                fallback_locale
            )));
        }
        Ok(Self {
            table,
            active_locale,
            fallback_locale,
        })
    }

    pub fn active_locale(&self) -> &LanguageIdentifier {
        &self.active_locale
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    /// Locales with at least one message, in no particular order.
    pub fn available_locales(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.table.keys()
    }

    /// Switches the active locale. Always succeeds; keys the new locale
    /// does not cover are served by the fallback.
    pub fn set_active_locale(&mut self, locale: LanguageIdentifier) {
        self.active_locale = locale;
    }

    /// Inserts or overwrites a single message, creating the locale's
    /// table on first use.
    pub fn set_message(
        &mut self,
        locale: LanguageIdentifier,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.table
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Renders a message that takes no parameters.
    pub fn resolve(&self, key: &str) -> Result<String> {
        self.resolve_with(key, &[])
    }

    /// Renders a message, substituting `{name}` placeholders from
    /// `params`. A placeholder with no supplied value is left literal so
    /// rendering never loses information; use [`resolve_strict`] to turn
    /// that into an error instead.
    ///
    /// [`resolve_strict`]: Self::resolve_strict
    pub fn resolve_with(&self, key: &str, params: &Params) -> Result<String> {
        let template = self.lookup(key)?;
        render(key, template, params, false)
    }

    /// Like [`resolve_with`], but fails with [`Error::MissingParameter`]
    /// on the first placeholder without a supplied value.
    ///
    /// [`resolve_with`]: Self::resolve_with
    pub fn resolve_strict(&self, key: &str, params: &Params) -> Result<String> {
        let template = self.lookup(key)?;
        render(key, template, params, true)
    }

    /// Convenience for UI code that must always display something:
    /// renders the message, or returns the raw key when it is missing
    /// from both locales.
    pub fn resolve_or_key(&self, key: &str, params: &Params) -> String {
        self.resolve_with(key, params)
            .unwrap_or_else(|_| key.to_string())
    }

    /// Raw template lookup: active locale first, then fallback.
    fn lookup(&self, key: &str) -> Result<&str> {
        self.table
            .get(&self.active_locale)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.table
                    .get(&self.fallback_locale)
                    .and_then(|messages| messages.get(key))
            })
            .map(String::as_str)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }
}

/// Single-pass placeholder substitution. Substituted values are never
/// re-scanned, so a value containing `{...}` cannot trigger a second
/// expansion.
fn render(key: &str, template: &str, params: &Params, strict: bool) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match params.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => out.push_str(&value.to_string()),
                    None if strict => {
                        return Err(Error::MissingParameter {
                            key: key.to_string(),
                            name: name.to_string(),
                        });
                    }
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            // Unmatched brace: not a placeholder, keep it literal.
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
