//! Language selection and string lookup.
//!
//! Lookups never fail: a key missing from the requested language falls back
//! to English, and a key missing from English is returned as-is.

pub mod context;
pub mod preferences;
mod strings;

/// Languages the site ships string tables for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    ZhCn,
    ZhTw,
    Th,
    Vi,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::ZhCn,
        Language::ZhTw,
        Language::Th,
        Language::Vi,
    ];

    /// Parses a language code such as `zh-CN`. Codes match exactly, so
    /// `zh-cn` or `EN` are unsupported.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::ZhCn => "zh-CN",
            Language::ZhTw => "zh-TW",
            Language::Th => "th",
            Language::Vi => "vi",
        }
    }

    /// Native name shown in the language selector.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::ZhCn => "简体中文",
            Language::ZhTw => "繁體中文",
            Language::Th => "ไทย",
            Language::Vi => "Tiếng Việt",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::ZhCn => "🇨🇳",
            Language::ZhTw => "🇹🇼",
            Language::Th => "🇹🇭",
            Language::Vi => "🇻🇳",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => strings::EN,
            Language::ZhCn => strings::ZH_CN,
            Language::ZhTw => strings::ZH_TW,
            Language::Th => strings::TH,
            Language::Vi => strings::VI,
        }
    }

    pub fn t<'a>(self, key: &'a str) -> &'a str {
        translate(key, self.code())
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Looks up `key` for a raw language code. Unsupported codes read English.
pub fn translate<'a>(key: &'a str, code: &str) -> &'a str {
    let table = Language::from_code(code).map_or(strings::EN, Language::table);
    lookup(table, key)
        .or_else(|| lookup(strings::EN, key))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_codes_only() {
        assert_eq!(Language::from_code("zh-CN"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("vi"), Some(Language::Vi));
        assert_eq!(Language::from_code("zh-tw"), None);
        assert_eq!(Language::from_code(" vi "), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate("home", "en"), "Home");
        assert_eq!(translate("home", "zh-CN"), "首页");
        assert_eq!(translate("pricing", "vi"), "Giá cả");
    }

    #[test]
    fn unsupported_language_matches_english() {
        for key in ["home", "heroTitle", "servicesSubtitle", "averageRating"] {
            assert_eq!(translate(key, "fr"), translate(key, "en"));
        }
    }

    #[test]
    fn miscased_codes_read_english() {
        for code in ["zh-cn", "ZH-TW", "EN", " th"] {
            for key in ["home", "pricing", "connectWallet"] {
                assert_eq!(translate(key, code), translate(key, "en"));
            }
        }
    }

    #[test]
    fn method_and_free_lookup_agree() {
        for lang in Language::ALL {
            assert_eq!(lang.t("heroTitle"), translate("heroTitle", lang.code()));
        }
    }

    #[test]
    fn missing_key_falls_back_to_raw_key() {
        assert_eq!(translate("noSuchKey", "th"), "noSuchKey");
        assert_eq!(translate("noSuchKey", "en"), "noSuchKey");
    }

    #[test]
    fn every_table_covers_the_english_keys() {
        for lang in Language::ALL {
            for (key, _) in strings::EN {
                assert!(
                    lookup(lang.table(), key).is_some(),
                    "{} is missing {}",
                    lang.code(),
                    key
                );
            }
        }
    }
}
