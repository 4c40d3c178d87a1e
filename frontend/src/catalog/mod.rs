//! The game catalog shown on the services page.

pub mod models;
pub mod pagination;
pub mod store;

use log::error;
use once_cell::sync::Lazy;

pub use models::Game;
pub use store::{Catalog, CatalogSelection, CategoryFilter};

pub const EMBEDDED_FIXTURE: &str = include_str!("../../assets/games.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(EMBEDDED_FIXTURE) {
    Ok(catalog) => catalog,
    Err(e) => {
        error!("Game catalog unavailable: {}", e);
        Catalog::default()
    }
});

/// The bundled catalog, parsed on first use.
pub fn embedded() -> &'static Catalog {
    &CATALOG
}
