use yew::prelude::*;

use super::preferences::Theme;
use super::Language;

/// Shared by the whole app so a language change re-renders every page.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

/// The active language, or English outside a provider.
#[hook]
pub fn use_language() -> Language {
    use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default()
}

/// The active colour theme. Every toggle reads it from here, so they stay in
/// step no matter which one was clicked.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

impl ThemeContext {
    /// Requests the opposite of the current theme and returns it.
    pub fn toggle(&self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme.emit(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn context(theme: Theme, log: &Rc<RefCell<Vec<Theme>>>) -> ThemeContext {
        let log = log.clone();
        ThemeContext {
            theme,
            set_theme: Callback::from(move |next| log.borrow_mut().push(next)),
        }
    }

    #[test]
    fn toggle_emits_the_opposite_theme() {
        let log = Rc::new(RefCell::new(Vec::new()));
        assert_eq!(context(Theme::Light, &log).toggle(), Theme::Dark);
        assert_eq!(context(Theme::Dark, &log).toggle(), Theme::Light);
        assert_eq!(*log.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn toggles_sharing_a_context_agree() {
        // Two toggles rendered from the same provider value: whichever is
        // clicked, the next render hands both the new theme.
        let log = Rc::new(RefCell::new(Vec::new()));
        let desktop = context(Theme::Light, &log);
        let mobile = desktop.clone();
        let next = mobile.toggle();

        let rerendered = context(next, &log);
        assert_eq!(rerendered.toggle(), Theme::Light);
        assert_eq!(*log.borrow(), vec![Theme::Dark, Theme::Light]);
    }
}
