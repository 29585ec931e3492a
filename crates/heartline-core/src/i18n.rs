//! Localized string catalogs.
//!
//! Static key to template tables, one tree per locale (English and
//! Vietnamese). Templates use `{name}` placeholder syntax; counts are
//! substituted numerically with a single template per key, no plural-rule
//! branching. Lookups are total: a key missing from a locale falls back to
//! English, and a key missing everywhere renders as itself.

mod en;
mod vi;

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::HeartlineError;

/// Supported UI locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Vietnamese
    Vi,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// All supported locales
    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Vi]
    }

    /// The locale's own name for itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Vi => "Tiếng Việt",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Vi => write!(f, "vi"),
        }
    }
}

impl FromStr for Locale {
    type Err = HeartlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(HeartlineError::UnknownLocale(other.to_string())),
        }
    }
}

static EN_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| en::MESSAGES.iter().copied().collect());

static VI_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| vi::MESSAGES.iter().copied().collect());

fn index(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    match locale {
        Locale::En => &EN_INDEX,
        Locale::Vi => &VI_INDEX,
    }
}

/// Look up the template for a message key.
///
/// Falls back to English for keys a locale has not translated yet, and to
/// the key itself when no catalog knows it.
pub fn message<'a>(locale: Locale, key: &'a str) -> &'a str {
    if let Some(template) = index(locale).get(key).copied() {
        return template;
    }
    if locale != Locale::En {
        if let Some(template) = EN_INDEX.get(key).copied() {
            return template;
        }
    }
    key
}

/// Interpolate `{name}` placeholders in a template.
///
/// Placeholders with no matching argument are left verbatim, as is any
/// unbalanced `{`.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Look up a key and interpolate its arguments in one step
pub fn translate(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    render(message(locale, key), args)
}

/// All known message keys (the English catalog is the reference set)
pub fn keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = en::MESSAGES.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys
}
