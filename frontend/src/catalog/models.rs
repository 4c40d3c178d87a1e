use serde::Deserialize;

use crate::config;
use crate::i18n::Language;

/// Text that is either a single string or a per-locale mapping.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(LocaleMap),
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

/// Fixture locale keys are lower case (`zh-cn`), unlike language codes.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LocaleMap {
    pub en: Option<String>,
    #[serde(rename = "zh-cn")]
    pub zh_cn: Option<String>,
    #[serde(rename = "zh-tw")]
    pub zh_tw: Option<String>,
    pub th: Option<String>,
    pub vi: Option<String>,
}

impl LocaleMap {
    fn get(&self, language: Language) -> Option<&str> {
        let value = match language {
            Language::En => &self.en,
            Language::ZhCn => &self.zh_cn,
            Language::ZhTw => &self.zh_tw,
            Language::Th => &self.th,
            Language::Vi => &self.vi,
        };
        value.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl LocalizedText {
    /// Resolves to the requested language, then English.
    pub fn resolve(&self, language: Language) -> Option<&str> {
        match self {
            LocalizedText::Plain(text) if text.trim().is_empty() => None,
            LocalizedText::Plain(text) => Some(text),
            LocalizedText::Localized(map) => map.get(language).or_else(|| map.get(Language::En)),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GameImages {
    pub main: Option<String>,
    pub icon: Option<String>,
    pub local_main: Option<String>,
    pub local_icon: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GameLinks {
    pub main: Option<String>,
    pub demo: Option<String>,
}

/// One catalog record, as stored in `assets/games.json`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: LocalizedText,
    pub category: String,
    #[serde(default)]
    pub platform: Vec<String>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub players: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub images: Option<GameImages>,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub launch_url: String,
    #[serde(default)]
    pub links: Option<GameLinks>,
}

impl Game {
    pub fn display_name(&self, language: Language) -> &str {
        self.name.resolve(language).unwrap_or("Untitled Game")
    }

    pub fn display_description(&self, language: Language) -> &str {
        self.description
            .resolve(language)
            .unwrap_or("No description available")
    }

    /// Local artwork if the record has any, otherwise a stock image for the
    /// game's category.
    pub fn image_path(&self) -> String {
        let local = self.images.as_ref().and_then(|images| {
            [&images.local_main, &images.local_icon]
                .into_iter()
                .flatten()
                .find(|path| !path.trim().is_empty())
        });
        match local {
            Some(path) => path.clone(),
            None => default_image_path(&self.category),
        }
    }

    pub fn is_live(&self) -> bool {
        self.status.eq_ignore_ascii_case("live")
    }
}

pub fn default_image_path(category: &str) -> String {
    let file = match category.trim().to_lowercase().as_str() {
        "slot games" => "dragon-treasure.webp",
        "poker" => "texas-hold'em-1.webp",
        "blackjack" => "american-18.webp",
        "roulette" => "european-17.webp",
        "baccarat" => "punto-banco-15.webp",
        "sports" => "football-1.webp",
        "lottery" => "powerball-1.webp",
        "live" => "dragon-1.webp",
        _ => "dragon-treasure.webp",
    };
    format!("{}/{}", config::GAME_IMAGE_DIR, file)
}

/// Short label for a platform tag.
pub fn platform_icon(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "web" => "🖥",
        "mobile" => "📱",
        "desktop" => "💻",
        _ => "🎮",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(json: &str) -> Game {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn plain_name_ignores_language() {
        let g = game(r#"{"id":"a","name":"Lucky Fortune","category":"Slot Games"}"#);
        assert_eq!(g.display_name(Language::Th), "Lucky Fortune");
    }

    #[test]
    fn localized_name_falls_back_to_english() {
        let g = game(
            r#"{"id":"a","name":{"en":"Texas Hold'em","zh-cn":"德州扑克"},"category":"Poker"}"#,
        );
        assert_eq!(g.display_name(Language::ZhCn), "德州扑克");
        assert_eq!(g.display_name(Language::Vi), "Texas Hold'em");
    }

    #[test]
    fn empty_localized_name_is_untitled() {
        let g = game(r#"{"id":"a","name":{"th":""},"category":"Poker"}"#);
        assert_eq!(g.display_name(Language::Th), "Untitled Game");
        assert_eq!(g.display_description(Language::Th), "No description available");
    }

    #[test]
    fn prefers_local_main_then_local_icon() {
        let g = game(
            r#"{"id":"a","name":"x","category":"Poker",
                "images":{"local_main":"/a.webp","local_icon":"/b.webp"}}"#,
        );
        assert_eq!(g.image_path(), "/a.webp");

        let g = game(
            r#"{"id":"a","name":"x","category":"Poker","images":{"local_icon":"/b.webp"}}"#,
        );
        assert_eq!(g.image_path(), "/b.webp");
    }

    #[test]
    fn blank_image_falls_back_to_category_default() {
        let g = game(
            r#"{"id":"a","name":"x","category":"Roulette","images":{"local_main":"  "}}"#,
        );
        assert_eq!(g.image_path(), "/assets/images/games/european-17.webp");

        let g = game(r#"{"id":"a","name":"x","category":"Keno"}"#);
        assert_eq!(g.image_path(), "/assets/images/games/dragon-treasure.webp");
    }

    #[test]
    fn reads_camel_case_launch_url() {
        let g = game(r#"{"id":"a","name":"x","category":"Live","launchUrl":"https://x/a"}"#);
        assert_eq!(g.launch_url, "https://x/a");
    }
}
