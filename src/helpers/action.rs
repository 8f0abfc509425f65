//! Keyboard Actions and Shortcuts
//!
//! Global actions that map onto UI store transitions.

use crate::states::{Language, Theme};
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    Auto,
}

impl ThemeAction {
    /// Choices offered by the header selector
    pub fn all() -> &'static [ThemeAction] {
        &[ThemeAction::Light, ThemeAction::Dark, ThemeAction::Auto]
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeAction::Light => "Light",
            ThemeAction::Dark => "Dark",
            ThemeAction::Auto => "Auto",
        }
    }

    pub fn is_selected(self, current: Theme) -> bool {
        Theme::from(self) == current
    }
}

impl From<ThemeAction> for Theme {
    fn from(action: ThemeAction) -> Self {
        match action {
            ThemeAction::Light => Theme::Light,
            ThemeAction::Dark => Theme::Dark,
            ThemeAction::Auto => Theme::Auto,
        }
    }
}

/// Language selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LanguageAction {
    En,
    Ar,
    /// Switch between English and Arabic
    Toggle,
}

impl LanguageAction {
    /// Target language, `None` for a toggle
    pub fn language(self) -> Option<Language> {
        match self {
            LanguageAction::En => Some(Language::En),
            LanguageAction::Ar => Some(Language::Ar),
            LanguageAction::Toggle => None,
        }
    }

    /// Direct choices offered by the header selector
    pub fn choices() -> &'static [LanguageAction] {
        &[LanguageAction::En, LanguageAction::Ar]
    }

    pub fn label(self) -> &'static str {
        match self.language() {
            Some(language) => language.display_name(),
            None => "EN/ع",
        }
    }

    pub fn is_selected(self, current: Language) -> bool {
        self.language() == Some(current)
    }
}

/// Sidebar actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum SidebarAction {
    /// Show or hide the sidebar
    Toggle,
    /// Collapse to icons or expand
    ToggleCollapsed,
}

/// Overlay actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum OverlayAction {
    /// Close the topmost modal
    CloseTopModal,
    /// Close every modal
    CloseAllModals,
    /// Dismiss every notification
    ClearNotifications,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Layout
        KeyBinding::new("secondary-b", SidebarAction::Toggle, None),
        KeyBinding::new("secondary-shift-b", SidebarAction::ToggleCollapsed, None),
        // Preferences
        KeyBinding::new("secondary-alt-1", ThemeAction::Light, None),
        KeyBinding::new("secondary-alt-2", ThemeAction::Dark, None),
        KeyBinding::new("secondary-alt-3", ThemeAction::Auto, None),
        KeyBinding::new("secondary-alt-e", LanguageAction::En, None),
        KeyBinding::new("secondary-alt-a", LanguageAction::Ar, None),
        KeyBinding::new("secondary-shift-l", LanguageAction::Toggle, None),
        // Overlays
        KeyBinding::new("escape", OverlayAction::CloseTopModal, None),
        KeyBinding::new("secondary-shift-escape", OverlayAction::CloseAllModals, None),
        KeyBinding::new("secondary-shift-n", OverlayAction::ClearNotifications, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_actions_map_to_themes() {
        assert_eq!(Theme::from(ThemeAction::Auto), Theme::Auto);
        assert_eq!(Theme::from(ThemeAction::Dark), Theme::Dark);
    }

    #[test]
    fn language_toggle_has_no_target() {
        assert_eq!(LanguageAction::Ar.language(), Some(Language::Ar));
        assert_eq!(LanguageAction::Toggle.language(), None);
    }

    #[test]
    fn theme_selector_covers_every_theme() {
        let themes: Vec<Theme> = ThemeAction::all().iter().map(|a| Theme::from(*a)).collect();
        assert_eq!(themes, vec![Theme::Light, Theme::Dark, Theme::Auto]);

        let selected: Vec<_> = ThemeAction::all()
            .iter()
            .filter(|a| a.is_selected(Theme::Dark))
            .map(|a| a.label())
            .collect();
        assert_eq!(selected, vec!["Dark"]);
    }

    #[test]
    fn language_selector_uses_display_names() {
        let labels: Vec<_> = LanguageAction::choices().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["English", "العربية"]);
        assert!(LanguageAction::Ar.is_selected(Language::Ar));
        assert!(!LanguageAction::Toggle.is_selected(Language::En));
    }
}
