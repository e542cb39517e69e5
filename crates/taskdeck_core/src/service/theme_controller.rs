//! Light/dark toggle persisted in the `theme` slot.

use crate::model::theme::Theme;
use crate::slot::{SlotStore, THEME_SLOT};
use log::{error, info, warn};

pub struct ThemeController<S: SlotStore> {
    slots: S,
    theme: Theme,
}

impl<S: SlotStore> ThemeController<S> {
    /// Reads the stored theme; absent, invalid or unreadable means light.
    pub fn load(slots: S) -> Self {
        let stored = match slots.get(THEME_SLOT) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=theme_load module=theme status=error error={err}");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        info!("event=theme_load module=theme status=ok theme={theme}");
        Self { slots, theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, persists it and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.slots.set(THEME_SLOT, self.theme.as_str()) {
            error!("event=theme_persist module=theme status=error error={err}");
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeController;
    use crate::model::theme::Theme;
    use crate::slot::{MemorySlotStore, SlotStore, THEME_SLOT};

    #[test]
    fn defaults_to_light_without_stored_value() {
        let slots = MemorySlotStore::new();
        assert_eq!(ThemeController::load(&slots).current(), Theme::Light);
    }

    #[test]
    fn invalid_stored_value_reads_as_light() {
        let slots = MemorySlotStore::new().with_slot(THEME_SLOT, "sepia");
        assert_eq!(ThemeController::load(&slots).current(), Theme::Light);
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let slots = MemorySlotStore::new();
        let mut controller = ThemeController::load(&slots);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(slots.get(THEME_SLOT).unwrap().as_deref(), Some("dark"));
        assert_eq!(ThemeController::load(&slots).current(), Theme::Dark);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(slots.get(THEME_SLOT).unwrap().as_deref(), Some("light"));
    }
}
