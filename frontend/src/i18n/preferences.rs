//! Language and theme preferences kept in the browser's `localStorage`.
//!
//! Storage access is best effort: a missing window, disabled storage or a
//! failed write leaves the in-memory choice in effect.

use log::warn;
use web_sys::{window, Storage};

use super::Language;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// A stored theme wins; otherwise follow the system colour scheme.
pub fn resolve_theme(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Unknown or missing codes resolve to English.
pub fn resolve_language(saved: Option<&str>) -> Language {
    saved.and_then(Language::from_code).unwrap_or_default()
}

fn storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

fn write(key: &str, value: &str) {
    match storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                warn!("Failed to persist {} preference", key);
            }
        }
        None => warn!("Local storage unavailable, {} preference not saved", key),
    }
}

pub fn load_language() -> Language {
    resolve_language(read(config::LANGUAGE_STORAGE_KEY).as_deref())
}

pub fn store_language(language: Language) {
    write(config::LANGUAGE_STORAGE_KEY, language.code());
}

pub fn load_theme() -> Theme {
    let prefers_dark = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches());
    resolve_theme(read(config::THEME_STORAGE_KEY).as_deref(), prefers_dark)
}

pub fn store_theme(theme: Theme) {
    write(config::THEME_STORAGE_KEY, theme.as_str());
}

/// Adds or removes the `dark` class on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if result.is_err() {
        warn!("Failed to apply {} theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_theme_overrides_system_preference() {
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unset_theme_follows_system() {
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
        assert_eq!(resolve_theme(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn stored_language_falls_back_to_english() {
        assert_eq!(resolve_language(Some("th")), Language::Th);
        assert_eq!(resolve_language(Some("klingon")), Language::En);
        assert_eq!(resolve_language(None), Language::En);
    }
}
