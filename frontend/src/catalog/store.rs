use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::models::Game;
use super::pagination::{clamp_page, total_pages};

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse game fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which records a view shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` (any case) selects everything; anything else is an exact
    /// category name.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, game: &Game) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => game.category == *category,
        }
    }
}

/// One page of a filtered view.
#[derive(Debug, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Game>,
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the filter across all pages.
    pub total_items: usize,
    /// Offset of the first item within the filtered set.
    pub offset: usize,
}

impl CatalogPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive range for "Showing x-y of n"; `None` when empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.offset + self.items.len()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogStats {
    pub total_games: usize,
    pub categories: usize,
    pub average_rating: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Fixture {
    List(Vec<Game>),
    Wrapped { games: Vec<Game> },
}

/// The read-only game list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Accepts either a bare array of games or `{ "games": [...] }`.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let games = match serde_json::from_str::<Fixture>(text)? {
            Fixture::List(games) | Fixture::Wrapped { games } => games,
        };
        Ok(Self::new(games))
    }

    /// `"All"` followed by each distinct category in fixture order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_LABEL];
        for game in &self.games {
            if seen.insert(game.category.as_str()) {
                categories.push(game.category.as_str());
            }
        }
        categories
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Game> {
        self.games.iter().filter(|game| filter.matches(game)).collect()
    }

    pub fn page(&self, filter: &CategoryFilter, page: usize, page_size: usize) -> CatalogPage<'_> {
        let page_size = page_size.max(1);
        let filtered = self.filter(filter);
        let total_items = filtered.len();
        let total_pages = total_pages(total_items, page_size);
        let page = clamp_page(page, total_pages);
        let offset = (page - 1) * page_size;
        let items = filtered.into_iter().skip(offset).take(page_size).collect();
        CatalogPage {
            items,
            page,
            total_pages,
            total_items,
            offset,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let average_rating = if self.games.is_empty() {
            0.0
        } else {
            self.games.iter().map(|g| g.rating).sum::<f32>() / self.games.len() as f32
        };
        CatalogStats {
            total_games: self.games.len(),
            categories: self.categories().len() - 1,
            average_rating,
        }
    }
}

/// Category and page chosen on the services page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSelection {
    pub filter: CategoryFilter,
    pub page: usize,
}

impl Default for CatalogSelection {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            page: 1,
        }
    }
}

impl CatalogSelection {
    /// Switching category always starts from the first page.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_add(1), total_pages);
    }

    pub fn previous(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_sub(1), total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EMBEDDED_FIXTURE;

    fn fixture() -> Catalog {
        Catalog::from_json(EMBEDDED_FIXTURE).unwrap()
    }

    fn games(count: usize, category: &str) -> Vec<Game> {
        (0..count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": format!("{}-{}", category, i),
                    "name": format!("{} {}", category, i),
                    "category": category,
                    "rating": 4.0,
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn fixture_has_fourteen_records() {
        assert_eq!(fixture().games.len(), 14);
    }

    #[test]
    fn poker_fits_on_one_page() {
        let catalog = fixture();
        let page = catalog.page(&CategoryFilter::parse("Poker"), 1, 12);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|g| g.category == "Poker"));
    }

    #[test]
    fn every_category_filter_is_exact() {
        let catalog = fixture();
        for label in catalog.categories() {
            let filter = CategoryFilter::parse(label);
            let shown: Vec<&str> = catalog.filter(&filter).iter().map(|g| g.id.as_str()).collect();
            let expected: Vec<&str> = catalog
                .games
                .iter()
                .filter(|g| label == ALL_LABEL || g.category == label)
                .map(|g| g.id.as_str())
                .collect();
            assert_eq!(shown, expected, "category {}", label);
        }
    }

    #[test]
    fn all_filter_is_case_insensitive() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Poker"),
            CategoryFilter::Only("Poker".to_string())
        );
    }

    #[test]
    fn categories_are_distinct_in_fixture_order() {
        let catalog = fixture();
        assert_eq!(
            catalog.categories(),
            vec![
                "All",
                "Slot Games",
                "Poker",
                "Blackjack",
                "Roulette",
                "Baccarat",
                "Sports",
                "Lottery",
                "Live"
            ]
        );
        assert_eq!(catalog.stats().categories, 8);
        assert_eq!(catalog.stats().total_games, 14);
    }

    #[test]
    fn slices_later_pages() {
        let catalog = Catalog::new(games(30, "Slots"));
        let page = catalog.page(&CategoryFilter::All, 3, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].id, "Slots-24");
        assert_eq!(page.showing(), Some((25, 30)));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let catalog = Catalog::new(games(30, "Slots"));
        assert_eq!(catalog.page(&CategoryFilter::All, 0, 12).page, 1);
        let last = catalog.page(&CategoryFilter::All, 99, 12);
        assert_eq!(last.page, 3);
        assert_eq!(last.items.len(), 6);
    }

    #[test]
    fn unknown_category_renders_empty() {
        let catalog = fixture();
        let page = catalog.page(&CategoryFilter::parse("Keno"), 4, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.showing(), None);
    }

    #[test]
    fn changing_category_resets_page() {
        let catalog = Catalog::new(games(30, "Slots"));
        let mut selection = CatalogSelection::default();
        let total = catalog.page(&selection.filter, 1, 12).total_pages;
        selection.next(total);
        selection.next(total);
        assert_eq!(selection.page, 3);
        selection.next(total);
        assert_eq!(selection.page, 3);

        selection.select_category(CategoryFilter::parse("Slots"));
        assert_eq!(selection.page, 1);
        selection.previous(total);
        assert_eq!(selection.page, 1);
    }

    #[test]
    fn accepts_wrapped_fixture() {
        let catalog =
            Catalog::from_json(r#"{"games":[{"id":"a","name":"A","category":"Live"}]}"#).unwrap();
        assert_eq!(catalog.games.len(), 1);
    }

    #[test]
    fn rejects_malformed_fixture() {
        let err = Catalog::from_json("[{\"id\": 1").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn empty_catalog_stats() {
        let stats = Catalog::default().stats();
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.categories, 0);
        assert_eq!(stats.average_rating, 0.0);
    }
}
