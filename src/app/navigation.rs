//! Navigation - Pages and Breadcrumbs
//!
//! Maps product pages onto the store's page title and breadcrumb trail.

use crate::states::{BreadcrumbItem, UiStore, update_ui};
use gpui::App;
use serde::{Deserialize, Serialize};

/// Top-level pages of the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Dashboard,
    /// Post editor
    Compose,
    /// Published and scheduled posts
    Posts,
    Competitors,
    Analytics,
    /// Prayer-time-aware publishing calendar
    Schedule,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Compose => "Compose",
            Page::Posts => "Posts",
            Page::Competitors => "Competitors",
            Page::Analytics => "Analytics",
            Page::Schedule => "Schedule",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Compose => "/compose",
            Page::Posts => "/posts",
            Page::Competitors => "/competitors",
            Page::Analytics => "/analytics",
            Page::Schedule => "/schedule",
        }
    }

    /// Get all pages for the sidebar
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Compose,
            Page::Posts,
            Page::Competitors,
            Page::Analytics,
            Page::Schedule,
        ]
    }

    /// Breadcrumb trail ending at this page
    pub fn breadcrumb(&self) -> Vec<BreadcrumbItem> {
        match self {
            Page::Dashboard => vec![BreadcrumbItem::new(Page::Dashboard.title())],
            page => vec![
                BreadcrumbItem::link(Page::Dashboard.title(), Page::Dashboard.path()),
                BreadcrumbItem::new(page.title()),
            ],
        }
    }
}

/// Point the store at `page`: title, breadcrumb, and stale field errors cleared
pub fn enter_page(store: &mut UiStore, page: Page) {
    store.clear_errors();
    store.set_breadcrumb(page.breadcrumb());
    store.set_page_title(page.title());
}

/// Navigate the global store to `page`
pub fn navigate(cx: &mut App, page: Page) {
    update_ui(cx, |store| enter_page(store, page));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{MemoryStorage, SharedTitle};

    #[test]
    fn dashboard_breadcrumb_has_no_links() {
        let trail = Page::Dashboard.breadcrumb();
        assert_eq!(trail, vec![BreadcrumbItem::new("Dashboard")]);
    }

    #[test]
    fn entering_page_updates_title_and_breadcrumb() {
        let title = SharedTitle::new();
        let mut store = UiStore::new(MemoryStorage::new(), title.clone());
        store.set_field_error("caption", Some("required".to_string()));

        enter_page(&mut store, Page::Competitors);

        assert_eq!(store.state().page_title(), "Competitors");
        assert_eq!(
            store.state().breadcrumb(),
            &[
                BreadcrumbItem::link("Dashboard", "/"),
                BreadcrumbItem::new("Competitors"),
            ]
        );
        assert!(!store.state().has_errors());
        assert_eq!(title.take_pending().as_deref(), Some("Competitors - Kuwait Social AI"));
    }
}
