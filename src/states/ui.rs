//! UI State Store
//!
//! Process-wide transient UI state: theme, language/direction, sidebar,
//! loading flags, notifications, modal stack, breadcrumb, page title and
//! user-facing error messages.
//!
//! [`UiState`] is the plain value and its transitions. [`UiStore`] owns it
//! together with identity counters and the two external collaborators
//! (settings storage and the document title surface).

use super::modal::{Modal, ModalId, NewModal};
use super::notification::{NewNotification, Notification, NotificationId};
use super::settings::{Direction, Language, SettingsStorage, Theme};
use super::title::{TitleSurface, document_title};
use crate::constants::{LANGUAGE_KEY, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use tracing::{debug, error, info, warn};

/// One entry of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// Loading flags. A component is loading iff its name is in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    global: bool,
    components: BTreeSet<String>,
}

/// User-facing error messages. A field has an error iff it has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    global: Option<String>,
    fields: BTreeMap<String, String>,
}

// ==================== State ====================

/// The UI state value
#[derive(Debug)]
pub struct UiState {
    theme: Theme,
    language: Language,
    direction: Direction,
    sidebar_open: bool,
    sidebar_collapsed: bool,
    loading: LoadingState,
    notifications: Vec<Notification>,
    modals: Vec<Modal>,
    breadcrumb: Vec<BreadcrumbItem>,
    page_title: String,
    errors: ErrorState,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default(), Language::default())
    }
}

impl UiState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            direction: language.direction(),
            sidebar_open: true,
            sidebar_collapsed: false,
            loading: LoadingState::default(),
            notifications: Vec::new(),
            modals: Vec::new(),
            breadcrumb: Vec::new(),
            page_title: String::new(),
            errors: ErrorState::default(),
        }
    }

    // ==================== Getters ====================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_global_loading(&self) -> bool {
        self.loading.global
    }

    pub fn is_component_loading(&self, component: &str) -> bool {
        self.loading.components.contains(component)
    }

    /// True when anything at all is loading
    pub fn is_any_loading(&self) -> bool {
        self.loading.global || !self.loading.components.is_empty()
    }

    /// Notifications in display order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Modal stack, bottom first
    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    pub fn top_modal(&self) -> Option<&Modal> {
        self.modals.last()
    }

    pub fn is_modal_open(&self, modal_type: &str) -> bool {
        self.modals.iter().any(|m| m.modal_type == modal_type)
    }

    pub fn breadcrumb(&self) -> &[BreadcrumbItem] {
        &self.breadcrumb
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn global_error(&self) -> Option<&str> {
        self.errors.global.as_deref()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.fields.get(field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.errors.fields
    }

    pub fn has_errors(&self) -> bool {
        self.errors.global.is_some() || !self.errors.fields.is_empty()
    }

    // ==================== Transitions ====================

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Direction is recomputed here and nowhere else
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.direction = language.direction();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn set_global_loading(&mut self, loading: bool) {
        self.loading.global = loading;
    }

    pub fn set_component_loading(&mut self, component: &str, loading: bool) {
        if loading {
            self.loading.components.insert(component.to_string());
        } else {
            self.loading.components.remove(component);
        }
    }

    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Returns whether an entry was removed
    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn push_modal(&mut self, modal: Modal) {
        self.modals.push(modal);
    }

    /// Close a modal anywhere in the stack; only its own handler fires
    pub fn close_modal(&mut self, id: ModalId) -> bool {
        let Some(pos) = self.modals.iter().position(|m| m.id == id) else {
            return false;
        };
        self.modals.remove(pos).close();
        true
    }

    pub fn close_top_modal(&mut self) -> Option<ModalId> {
        let modal = self.modals.pop()?;
        let id = modal.id;
        modal.close();
        Some(id)
    }

    /// Fire every close handler bottom to top, then empty the stack
    pub fn clear_modals(&mut self) -> usize {
        let modals = std::mem::take(&mut self.modals);
        let count = modals.len();
        for modal in modals {
            modal.close();
        }
        count
    }

    pub fn set_breadcrumb(&mut self, items: Vec<BreadcrumbItem>) {
        self.breadcrumb = items;
    }

    pub fn set_page_title(&mut self, title: String) {
        self.page_title = title;
    }

    pub fn set_global_error(&mut self, error: Option<String>) {
        self.errors.global = error;
    }

    pub fn set_field_error(&mut self, field: &str, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.fields.insert(field.to_string(), message);
            }
            None => {
                self.errors.fields.remove(field);
            }
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors = ErrorState::default();
    }
}

// ==================== Actions ====================

/// Every store transition as a value
#[derive(Debug)]
pub enum UiAction {
    SetTheme(Theme),
    SetLanguage(Language),
    ToggleLanguage,
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleSidebarCollapsed,
    SetSidebarCollapsed(bool),
    SetGlobalLoading(bool),
    SetComponentLoading { component: String, loading: bool },
    AddNotification(NewNotification),
    RemoveNotification(NotificationId),
    ClearNotifications,
    OpenModal(NewModal),
    CloseModal(ModalId),
    CloseTopModal,
    ClearModals,
    SetBreadcrumb(Vec<BreadcrumbItem>),
    SetPageTitle(String),
    SetGlobalError(Option<String>),
    SetFieldError { field: String, error: Option<String> },
    ClearErrors,
}

/// Identity handed out by a dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issued {
    Notification(NotificationId),
    Modal(ModalId),
}

// ==================== Store ====================

/// Single-writer owner of [`UiState`]
pub struct UiStore {
    state: UiState,
    next_notification_id: u64,
    next_modal_id: u64,
    storage: Box<dyn SettingsStorage>,
    title: Box<dyn TitleSurface>,
}

impl UiStore {
    /// Create the store, seeding theme and language from storage
    pub fn new(storage: impl SettingsStorage + 'static, title: impl TitleSurface + 'static) -> Self {
        let theme = load_setting::<Theme>(&storage, THEME_KEY).unwrap_or_default();
        let language = load_setting::<Language>(&storage, LANGUAGE_KEY).unwrap_or_default();
        info!(%theme, %language, "UI store initialized");

        Self {
            state: UiState::new(theme, language),
            next_notification_id: 1,
            next_modal_id: 1,
            storage: Box::new(storage),
            title: Box::new(title),
        }
    }

    /// Read the current state
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Full document title for the current page title
    pub fn document_title(&self) -> String {
        document_title(&self.state.page_title)
    }

    fn persist(&mut self, key: &'static str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            error!(error = %e, key, value, "Failed to persist setting");
        }
    }

    // ==================== Preferences ====================

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
        self.persist(THEME_KEY, theme.as_str());
        debug!(%theme, "Theme changed");
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.set_language(language);
        self.persist(LANGUAGE_KEY, language.as_str());
        debug!(%language, direction = ?self.state.direction, "Language changed");
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.state.language.toggled());
    }

    // ==================== Layout ====================

    pub fn toggle_sidebar(&mut self) {
        self.state.toggle_sidebar();
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.state.set_sidebar_open(open);
    }

    pub fn toggle_sidebar_collapsed(&mut self) {
        self.state.toggle_sidebar_collapsed();
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.state.set_sidebar_collapsed(collapsed);
    }

    // ==================== Loading ====================

    pub fn set_global_loading(&mut self, loading: bool) {
        self.state.set_global_loading(loading);
    }

    pub fn set_component_loading(&mut self, component: &str, loading: bool) {
        self.state.set_component_loading(component, loading);
    }

    // ==================== Notifications ====================

    /// Queue a notification and return its fresh identity
    pub fn add_notification(&mut self, request: NewNotification) -> NotificationId {
        let id = NotificationId(self.next_notification_id);
        self.next_notification_id += 1;

        let notification = Notification::from_request(id, request);
        debug!(id = id.0, kind = notification.kind.label(), "Notification added");
        self.state.push_notification(notification);
        id
    }

    /// Unknown ids are ignored
    pub fn remove_notification(&mut self, id: NotificationId) {
        if self.state.remove_notification(id) {
            debug!(id = id.0, "Notification removed");
        }
    }

    pub fn clear_notifications(&mut self) {
        self.state.clear_notifications();
    }

    // ==================== Modals ====================

    /// Push a modal onto the stack and return its fresh identity
    pub fn open_modal(&mut self, request: NewModal) -> ModalId {
        let id = ModalId(self.next_modal_id);
        self.next_modal_id += 1;

        debug!(id = id.0, modal_type = %request.modal_type, "Modal opened");
        self.state.push_modal(Modal::from_request(id, request));
        id
    }

    /// Unknown ids are ignored
    pub fn close_modal(&mut self, id: ModalId) {
        if self.state.close_modal(id) {
            debug!(id = id.0, "Modal closed");
        }
    }

    pub fn close_top_modal(&mut self) {
        if let Some(id) = self.state.close_top_modal() {
            debug!(id = id.0, "Top modal closed");
        }
    }

    pub fn clear_modals(&mut self) {
        let count = self.state.clear_modals();
        if count > 0 {
            debug!(count, "Modals cleared");
        }
    }

    // ==================== Page ====================

    pub fn set_breadcrumb(&mut self, items: Vec<BreadcrumbItem>) {
        self.state.set_breadcrumb(items);
    }

    /// Also pushes the full document title to the title surface
    pub fn set_page_title(&mut self, title: impl Into<String>) {
        self.state.set_page_title(title.into());
        let full = self.document_title();
        self.title.set_title(&full);
    }

    // ==================== Errors ====================

    pub fn set_global_error(&mut self, error: Option<String>) {
        self.state.set_global_error(error);
    }

    pub fn set_field_error(&mut self, field: &str, error: Option<String>) {
        self.state.set_field_error(field, error);
    }

    pub fn clear_errors(&mut self) {
        self.state.clear_errors();
    }

    // ==================== Dispatch ====================

    /// Apply a transition given as a value
    pub fn dispatch(&mut self, action: UiAction) -> Option<Issued> {
        match action {
            UiAction::SetTheme(theme) => self.set_theme(theme),
            UiAction::SetLanguage(language) => self.set_language(language),
            UiAction::ToggleLanguage => self.toggle_language(),
            UiAction::ToggleSidebar => self.toggle_sidebar(),
            UiAction::SetSidebarOpen(open) => self.set_sidebar_open(open),
            UiAction::ToggleSidebarCollapsed => self.toggle_sidebar_collapsed(),
            UiAction::SetSidebarCollapsed(collapsed) => self.set_sidebar_collapsed(collapsed),
            UiAction::SetGlobalLoading(loading) => self.set_global_loading(loading),
            UiAction::SetComponentLoading { component, loading } => {
                self.set_component_loading(&component, loading)
            }
            UiAction::AddNotification(request) => {
                return Some(Issued::Notification(self.add_notification(request)));
            }
            UiAction::RemoveNotification(id) => self.remove_notification(id),
            UiAction::ClearNotifications => self.clear_notifications(),
            UiAction::OpenModal(request) => {
                return Some(Issued::Modal(self.open_modal(request)));
            }
            UiAction::CloseModal(id) => self.close_modal(id),
            UiAction::CloseTopModal => self.close_top_modal(),
            UiAction::ClearModals => self.clear_modals(),
            UiAction::SetBreadcrumb(items) => self.set_breadcrumb(items),
            UiAction::SetPageTitle(title) => self.set_page_title(title),
            UiAction::SetGlobalError(error) => self.set_global_error(error),
            UiAction::SetFieldError { field, error } => self.set_field_error(&field, error),
            UiAction::ClearErrors => self.clear_errors(),
        }
        None
    }
}

/// Read and parse a persisted value; bad or unreadable values are logged and dropped
fn load_setting<T>(storage: &dyn SettingsStorage, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, key, "Failed to read setting");
            return None;
        }
    };

    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, key, value = %raw, "Ignoring invalid setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::states::settings::MemoryStorage;
    use crate::states::title::SharedTitle;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn make_store() -> UiStore {
        UiStore::new(MemoryStorage::new(), SharedTitle::new())
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let handle = fired.clone();
        (fired, move || handle.set(handle.get() + 1))
    }

    struct FailingStorage;

    impl SettingsStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Invalid {
                message: "unreadable".to_string(),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Invalid {
                message: "read-only".to_string(),
            })
        }
    }

    #[test]
    fn defaults_without_persisted_settings() {
        let store = make_store();
        let state = store.state();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.language(), Language::En);
        assert_eq!(state.direction(), Direction::Ltr);
        assert!(state.notifications().is_empty());
        assert!(state.modals().is_empty());
        assert!(!state.is_any_loading());
        assert!(!state.has_errors());
    }

    #[test]
    fn seeds_from_persisted_settings() {
        let storage = MemoryStorage::with_values([("theme", "dark"), ("language", "ar")]);
        let store = UiStore::new(storage, SharedTitle::new());
        assert_eq!(store.state().theme(), Theme::Dark);
        assert_eq!(store.state().language(), Language::Ar);
        assert_eq!(store.state().direction(), Direction::Rtl);
    }

    #[test]
    fn invalid_persisted_settings_fall_back() {
        let storage = MemoryStorage::with_values([("theme", "neon"), ("language", "klingon")]);
        let store = UiStore::new(storage, SharedTitle::new());
        assert_eq!(store.state().theme(), Theme::Light);
        assert_eq!(store.state().language(), Language::En);
    }

    #[test]
    fn storage_failures_do_not_fail_transitions() {
        let mut store = UiStore::new(FailingStorage, SharedTitle::new());
        store.set_theme(Theme::Auto);
        store.set_language(Language::Ar);
        assert_eq!(store.state().theme(), Theme::Auto);
        assert_eq!(store.state().direction(), Direction::Rtl);
    }

    #[test]
    fn setters_persist_preferences() {
        let storage = MemoryStorage::new();
        let mut store = UiStore::new(storage.clone(), SharedTitle::new());

        store.set_theme(Theme::Auto);
        store.set_language(Language::Ar);

        assert_eq!(storage.value("theme").as_deref(), Some("auto"));
        assert_eq!(storage.value("language").as_deref(), Some("ar"));
    }

    #[test]
    fn direction_tracks_latest_language() {
        let mut store = make_store();
        let sequence = [
            Language::Ar,
            Language::Ar,
            Language::En,
            Language::Ar,
            Language::En,
        ];
        for language in sequence {
            store.set_language(language);
            assert_eq!(store.state().direction().is_rtl(), language == Language::Ar);
        }

        store.toggle_language();
        assert_eq!(store.state().language(), Language::Ar);
        assert_eq!(store.state().direction(), Direction::Rtl);
    }

    #[test]
    fn sidebar_toggles() {
        let mut store = make_store();
        assert!(store.state().sidebar_open());
        store.toggle_sidebar();
        assert!(!store.state().sidebar_open());
        store.set_sidebar_open(true);
        assert!(store.state().sidebar_open());

        store.toggle_sidebar_collapsed();
        assert!(store.state().sidebar_collapsed());
        store.set_sidebar_collapsed(false);
        assert!(!store.state().sidebar_collapsed());
    }

    #[test]
    fn component_loading_uses_absence_for_false() {
        let mut store = make_store();
        store.set_component_loading("x", true);
        assert!(store.state().is_component_loading("x"));
        assert!(store.state().is_any_loading());

        store.set_component_loading("x", false);
        assert!(!store.state().is_component_loading("x"));
        assert_eq!(store.state().loading, LoadingState::default());

        assert!(!store.state().is_component_loading("never-set"));
        store.set_global_loading(true);
        assert!(store.state().is_global_loading());
    }

    #[test]
    fn notifications_get_unique_ids_and_default_duration() {
        let mut store = make_store();
        let first = store.add_notification(NewNotification::success("Post published").title("Done"));
        let second = store.add_notification(
            NewNotification::info("Syncing").duration(Duration::from_millis(1500)),
        );
        assert_ne!(first, second);

        let last = store.state().notifications().last().expect("notification");
        assert_eq!(last.id, second);
        assert_eq!(last.duration, Duration::from_millis(1500));

        let head = store.state().notification(first).expect("notification");
        assert_eq!(head.message, "Post published");
        assert_eq!(head.title.as_deref(), Some("Done"));
        assert_eq!(head.duration, Duration::from_millis(5000));

        store.clear_notifications();
        let third = store.add_notification(NewNotification::error("Oops"));
        assert!(third != first && third != second);
    }

    #[test]
    fn remove_notification_twice_is_noop() {
        let mut store = make_store();
        let keep = store.add_notification(NewNotification::info("keep"));
        let id = store.add_notification(NewNotification::warning("drop"));

        store.remove_notification(id);
        assert!(store.state().notification(id).is_none());
        assert_eq!(store.state().notifications().len(), 1);

        store.remove_notification(id);
        assert_eq!(store.state().notifications().len(), 1);
        assert_eq!(store.state().notifications()[0].id, keep);
    }

    #[test]
    fn close_top_modal_fires_once() {
        let mut store = make_store();
        let (fired, on_close) = counter();
        store.open_modal(NewModal::new("post-editor").on_close(on_close));

        store.close_top_modal();
        assert_eq!(fired.get(), 1);
        assert!(store.state().modals().is_empty());

        store.close_top_modal();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn close_top_leaves_lower_modal() {
        let mut store = make_store();
        let (fired_a, close_a) = counter();
        let (fired_b, close_b) = counter();
        let a = store.open_modal(NewModal::new("a").on_close(close_a));
        store.open_modal(NewModal::new("b").on_close(close_b));

        store.close_top_modal();
        assert_eq!(fired_b.get(), 1);
        assert_eq!(fired_a.get(), 0);
        assert_eq!(store.state().modals().len(), 1);
        assert_eq!(store.state().top_modal().map(|m| m.id), Some(a));
    }

    #[test]
    fn close_modal_by_id_in_middle_of_stack() {
        let mut store = make_store();
        let (fired_a, close_a) = counter();
        let (fired_b, close_b) = counter();
        let (fired_c, close_c) = counter();
        store.open_modal(NewModal::new("a").on_close(close_a));
        let b = store.open_modal(NewModal::new("b").on_close(close_b));
        store.open_modal(NewModal::new("c").on_close(close_c));

        store.close_modal(b);
        store.close_modal(b);
        assert_eq!((fired_a.get(), fired_b.get(), fired_c.get()), (0, 1, 0));

        let types: Vec<_> = store
            .state()
            .modals()
            .iter()
            .map(|m| m.modal_type.as_str())
            .collect();
        assert_eq!(types, vec!["a", "c"]);
        assert!(!store.state().is_modal_open("b"));
    }

    #[test]
    fn clear_modals_fires_in_insertion_order() {
        let mut store = make_store();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let log = order.clone();
            store.open_modal(NewModal::new(name).on_close(move || log.borrow_mut().push(name)));
        }
        store.open_modal(NewModal::new("no-handler"));

        store.clear_modals();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
        assert!(store.state().modals().is_empty());

        store.clear_modals();
        assert_eq!(order.borrow().len(), 3);
    }

    #[test]
    fn page_title_reaches_title_surface() {
        let title = SharedTitle::new();
        let mut store = UiStore::new(MemoryStorage::new(), title.clone());

        store.set_page_title("Competitors");
        assert_eq!(store.state().page_title(), "Competitors");
        assert_eq!(title.current().as_deref(), Some("Competitors - Kuwait Social AI"));
        assert_eq!(store.document_title(), "Competitors - Kuwait Social AI");
    }

    #[test]
    fn breadcrumb_is_replaced_wholesale() {
        let mut store = make_store();
        store.set_breadcrumb(vec![
            BreadcrumbItem::link("Home", "/"),
            BreadcrumbItem::new("Analytics"),
        ]);
        store.set_breadcrumb(vec![BreadcrumbItem::link("Posts", "/posts")]);

        assert_eq!(store.state().breadcrumb(), &[BreadcrumbItem::link("Posts", "/posts")]);
    }

    #[test]
    fn clear_errors_drops_global_and_fields() {
        let mut store = make_store();
        store.set_global_error(Some("Network unavailable".to_string()));
        store.set_field_error("email", Some("invalid".to_string()));
        store.set_field_error("password", Some("too short".to_string()));
        assert_eq!(store.state().field_error("email"), Some("invalid"));

        store.set_field_error("password", None);
        assert!(store.state().field_error("password").is_none());

        store.clear_errors();
        assert!(store.state().global_error().is_none());
        assert!(store.state().field_error("email").is_none());
        assert!(store.state().field_errors().is_empty());
        assert!(!store.state().has_errors());
    }

    #[test]
    fn dispatch_applies_actions() {
        let storage = MemoryStorage::new();
        let mut store = UiStore::new(storage.clone(), SharedTitle::new());

        store.dispatch(UiAction::SetLanguage(Language::Ar));
        store.dispatch(UiAction::SetComponentLoading {
            component: "metrics".to_string(),
            loading: true,
        });
        let issued = store.dispatch(UiAction::AddNotification(NewNotification::info("hi")));
        let Some(Issued::Notification(id)) = issued else {
            panic!("expected a notification id, got {issued:?}");
        };
        let modal = store.dispatch(UiAction::OpenModal(NewModal::new("schedule")));
        assert!(matches!(modal, Some(Issued::Modal(_))));

        assert_eq!(store.state().direction(), Direction::Rtl);
        assert_eq!(storage.value("language").as_deref(), Some("ar"));
        assert!(store.state().is_component_loading("metrics"));
        assert!(store.state().notification(id).is_some());
        assert!(store.state().is_modal_open("schedule"));

        assert_eq!(store.dispatch(UiAction::ClearModals), None);
        assert!(store.state().modals().is_empty());
    }
}
