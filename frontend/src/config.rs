use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "GWIN.ai";

pub const GAMES_PER_PAGE: usize = 12;
pub const PAGE_BUTTONS: usize = 5;
pub const GAME_IMAGE_DIR: &str = "/assets/images/games";

// Simulated assistant timings, milliseconds
pub const TYPING_DELAY_MIN_MS: u64 = 1_000;
pub const TYPING_DELAY_MAX_MS: u64 = 3_000;
pub const GENERATING_DELAY_MS: u64 = 2_000;
pub const INITIAL_MESSAGE_DELAY_MS: u32 = 1_000;

pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";
pub const THEME_STORAGE_KEY: &str = "theme";
