//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use tracing::error;

use crate::app::navigation::{Page, navigate};
use crate::app::workspace::Workspace;
use crate::constants::{APP_TITLE_SUFFIX, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{
    LanguageAction, MenuAction, OverlayAction, SidebarAction, ThemeAction, new_key_bindings,
};
use crate::states::{NewNotification, Theme, UiGlobalStore, push_notification, update_ui};

/// Wire global actions to store transitions
fn register_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let theme = Theme::from(*action);
        update_ui(cx, |store| store.set_theme(theme));
        push_notification(cx, NewNotification::info(format!("Theme set to {theme}")));
    });

    cx.on_action(|action: &LanguageAction, cx: &mut App| {
        update_ui(cx, |store| match action.language() {
            Some(language) => store.set_language(language),
            None => store.toggle_language(),
        });
    });

    cx.on_action(|action: &SidebarAction, cx: &mut App| {
        update_ui(cx, |store| match action {
            SidebarAction::Toggle => store.toggle_sidebar(),
            SidebarAction::ToggleCollapsed => store.toggle_sidebar_collapsed(),
        });
    });

    cx.on_action(|action: &OverlayAction, cx: &mut App| {
        update_ui(cx, |store| match action {
            OverlayAction::CloseTopModal => store.close_top_modal(),
            OverlayAction::CloseAllModals => store.clear_modals(),
            OverlayAction::ClearNotifications => store.clear_notifications(),
        });
    });
}

/// Run the Kuwait Social AI desktop application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let ui = UiGlobalStore::init(cx);
        cx.set_global(ui.clone());
        navigate(cx, Page::default());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(APP_TITLE_SUFFIX)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(ui.clone(), cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
