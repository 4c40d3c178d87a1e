//! Open/closed state for dropdowns and sheets, dismissed by a pointer-down
//! outside the element or the Escape key.

use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the state changed.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.open = false;
            return true;
        }
        false
    }

    /// Returns whether the state changed.
    pub fn key_down(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.open = false;
            return true;
        }
        false
    }
}

#[derive(Clone)]
pub struct UseDisclosureHandle {
    state: UseStateHandle<Disclosure>,
    on_change: Option<Callback<bool>>,
}

impl UseDisclosureHandle {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn update(&self, f: impl FnOnce(&mut Disclosure)) {
        let mut next = *self.state;
        f(&mut next);
        if next != *self.state {
            self.state.set(next);
            if let Some(on_change) = &self.on_change {
                on_change.emit(next.is_open());
            }
        }
    }

    pub fn open(&self) {
        self.update(Disclosure::open);
    }

    pub fn close(&self) {
        self.update(Disclosure::close);
    }

    pub fn toggle(&self) {
        self.update(Disclosure::toggle);
    }
}

/// Tracks a disclosure for the element behind `node`. Pointer-downs outside
/// that element and the Escape key close it while it is open.
#[hook]
pub fn use_disclosure(
    node: NodeRef,
    initial: bool,
    on_change: Option<Callback<bool>>,
) -> UseDisclosureHandle {
    let handle = UseDisclosureHandle {
        state: use_state(|| Disclosure::new(initial)),
        on_change,
    };

    {
        let handle = handle.clone();
        use_click_away(node, move |_: Event| {
            handle.update(|d| {
                d.pointer_down(false);
            });
        });
    }

    {
        let handle = handle.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let key = e.key();
            handle.update(|d| {
                d.key_down(&key);
            });
        });
    }

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_open_close() {
        let mut d = Disclosure::default();
        assert!(!d.is_open());
        d.toggle();
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
        d.open();
        d.open();
        assert!(d.is_open());
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn outside_pointer_closes_only_when_open() {
        let mut d = Disclosure::new(true);
        assert!(!d.pointer_down(true));
        assert!(d.is_open());
        assert!(d.pointer_down(false));
        assert!(!d.is_open());
        assert!(!d.pointer_down(false));
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut d = Disclosure::new(true);
        assert!(!d.key_down("Enter"));
        assert!(d.is_open());
        assert!(d.key_down("Escape"));
        assert!(!d.is_open());
        assert!(!d.key_down("Escape"));
    }
}
