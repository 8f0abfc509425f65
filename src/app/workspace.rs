//! Workspace - Root View
//!
//! Mirrors the UI store into the window: title, theme, direction, sidebar,
//! notifications and the modal stack. Page bodies are not rendered here.

use gpui::{
    Action, ClickEvent, Context, ElementId, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window, WindowAppearance, div, prelude::*, px,
};

use crate::app::navigation::{Page, navigate};
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
use crate::helpers::{LanguageAction, ThemeAction};
use crate::states::{Modal, Notification, UiGlobalStore, UiState};
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    ui: UiGlobalStore,
}

/// Selectable chip that dispatches `action` when clicked
fn render_choice<A: Action + Copy>(
    id: impl Into<ElementId>,
    label: &'static str,
    selected: bool,
    action: A,
    palette: Palette,
) -> impl IntoElement {
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded_md()
        .cursor_pointer()
        .text_size(px(Typography::TEXT_XS))
        .text_color(if selected {
            palette.accent
        } else {
            palette.text_muted
        })
        .when(selected, |el| el.border_1().border_color(palette.accent))
        .hover(move |s| s.bg(palette.background))
        .on_click(move |_event: &ClickEvent, window, cx| {
            window.dispatch_action(Box::new(action), cx);
        })
        .child(label)
}

impl Workspace {
    pub fn new(ui: UiGlobalStore, cx: &mut Context<Self>) -> Self {
        cx.observe(&ui.store(), |_this, _, cx| cx.notify()).detach();
        Self { ui }
    }

    fn render_header(&self, state: &UiState, palette: Palette) -> impl IntoElement {
        let trail = state.breadcrumb().iter().enumerate().map(move |(i, item)| {
            let color = if item.href.is_some() {
                palette.accent
            } else {
                palette.text_muted
            };
            let label = if i == 0 {
                item.label.clone()
            } else {
                format!("/ {}", item.label)
            };
            div().text_color(color).text_size(px(Typography::TEXT_XS)).child(label)
        });

        div()
            .w_full()
            .px_4()
            .py_2()
            .bg(palette.surface)
            .border_b_1()
            .border_color(palette.border)
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(div().flex().gap_1().children(trail))
                    .child(self.render_preferences(state, palette)),
            )
            .child(
                div()
                    .text_color(palette.text_primary)
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(state.page_title().to_string()),
            )
            .when(state.is_any_loading(), |el| {
                el.child(
                    div()
                        .text_color(palette.text_muted)
                        .text_size(px(Typography::TEXT_XS))
                        .child("Loading..."),
                )
            })
    }

    /// Theme and language selector
    fn render_preferences(&self, state: &UiState, palette: Palette) -> impl IntoElement {
        let theme = state.theme();
        let language = state.language();

        let themes = ThemeAction::all().iter().map(move |action| {
            render_choice(
                ("theme", *action as usize),
                action.label(),
                action.is_selected(theme),
                *action,
                palette,
            )
        });
        let languages = LanguageAction::choices().iter().map(move |action| {
            render_choice(
                ("language", *action as usize),
                action.label(),
                action.is_selected(language),
                *action,
                palette,
            )
        });

        div()
            .flex()
            .items_center()
            .gap_3()
            .child(div().flex().gap_1().children(themes))
            .child(div().flex().gap_1().children(languages))
    }

    fn render_sidebar(&self, state: &UiState, palette: Palette) -> impl IntoElement {
        let collapsed = state.sidebar_collapsed();
        let width = if collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let current = state.page_title().to_string();

        let items = Page::all().iter().map(move |page| {
            let page = *page;
            let active = page.title() == current;
            let label = if collapsed {
                page.title().chars().take(1).collect::<String>()
            } else {
                page.title().to_string()
            };

            div()
                .id(("nav", page as usize))
                .px_3()
                .py_2()
                .rounded_md()
                .cursor_pointer()
                .text_size(px(Typography::TEXT_SM))
                .text_color(if active {
                    palette.accent
                } else {
                    palette.text_primary
                })
                .hover(move |s| s.bg(palette.background))
                .on_click(move |_event: &ClickEvent, _window, cx| navigate(cx, page))
                .child(label)
        });

        div()
            .h_full()
            .w(px(width))
            .p_2()
            .bg(palette.surface)
            .border_color(palette.border)
            .border_1()
            .flex()
            .flex_col()
            .gap_1()
            .children(items)
    }

    fn render_notification(&self, notification: &Notification, palette: Palette) -> impl IntoElement {
        let id = notification.id;
        let store = self.ui.store();
        let action = notification.action.clone();

        div()
            .id(("notification", id.0 as usize))
            .w(px(320.0))
            .p_3()
            .rounded_md()
            .bg(palette.surface)
            .border_l_4()
            .border_color(palette.notification(notification.kind))
            .shadow_lg()
            .flex()
            .flex_col()
            .gap_1()
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                store.update(cx, |store, cx| {
                    store.remove_notification(id);
                    cx.notify();
                });
            })
            .child(
                div()
                    .flex()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .text_color(palette.text_primary)
                            .text_size(px(Typography::TEXT_SM))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(
                                notification
                                    .title
                                    .clone()
                                    .unwrap_or_else(|| notification.kind.label().to_string()),
                            ),
                    )
                    .child(
                        div()
                            .text_color(palette.text_muted)
                            .text_size(px(Typography::TEXT_XS))
                            .child(notification.time_label()),
                    ),
            )
            .child(
                div()
                    .text_color(palette.text_primary)
                    .text_size(px(Typography::TEXT_SM))
                    .child(notification.message.clone()),
            )
            .when_some(action, |el, action| {
                let label = action.label.clone();
                el.child(
                    div()
                        .id(("notification-action", id.0 as usize))
                        .text_color(palette.accent)
                        .text_size(px(Typography::TEXT_XS))
                        .cursor_pointer()
                        .on_click(move |_event: &ClickEvent, _window, _cx| action.invoke())
                        .child(label),
                )
            })
    }

    fn render_modal(&self, modal: &Modal, palette: Palette) -> impl IntoElement {
        let id = modal.id;
        let store = self.ui.store();
        let props = serde_json::Value::Object(modal.props.clone()).to_string();

        // Backdrop
        div()
            .absolute()
            .inset_0()
            .bg(palette.backdrop)
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .bg(palette.surface)
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(400.0))
                    .max_w(px(600.0))
                    .px_6()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .child(
                                div()
                                    .text_color(palette.text_primary)
                                    .text_size(px(Typography::TEXT_BASE))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(modal.modal_type.clone()),
                            )
                            .child(
                                div()
                                    .id(("modal-close", id.0 as usize))
                                    .text_color(palette.text_muted)
                                    .cursor_pointer()
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        store.update(cx, |store, cx| {
                                            store.close_modal(id);
                                            cx.notify();
                                        });
                                    })
                                    .child("×"),
                            ),
                    )
                    .child(
                        div()
                            .text_color(palette.text_muted)
                            .text_size(px(Typography::TEXT_XS))
                            .child(props),
                    ),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if let Some(title) = self.ui.title().take_pending() {
            window.set_window_title(&title);
        }

        let system_dark = matches!(
            window.appearance(),
            WindowAppearance::Dark | WindowAppearance::VibrantDark
        );
        let state = self.ui.read(cx).state();
        let palette = Palette::for_mode(state.theme().resolve(system_dark));

        let mut body = div()
            .flex_1()
            .flex()
            .flex_col()
            .child(self.render_header(state, palette));

        if let Some(message) = state.global_error() {
            body = body.child(
                div()
                    .mx_4()
                    .mt_2()
                    .p_2()
                    .rounded_md()
                    .text_color(palette.danger)
                    .text_size(px(Typography::TEXT_SM))
                    .child(message.to_string()),
            );
        }

        let field_errors = state.field_errors().iter().map(|(field, message)| {
            div()
                .mx_4()
                .text_color(palette.danger)
                .text_size(px(Typography::TEXT_XS))
                .child(format!("{field}: {message}"))
        });
        body = body.children(field_errors);

        let notifications = div()
            .absolute()
            .top_4()
            .right_4()
            .flex()
            .flex_col()
            .gap_2()
            .children(
                state
                    .notifications()
                    .iter()
                    .map(|n| self.render_notification(n, palette)),
            );

        div()
            .size_full()
            .relative()
            .bg(palette.background)
            .child(
                div()
                    .size_full()
                    .flex()
                    .when(state.direction().is_rtl(), |el| el.flex_row_reverse())
                    .when(state.sidebar_open(), |el| {
                        el.child(self.render_sidebar(state, palette))
                    })
                    .child(body),
            )
            .child(notifications)
            .when_some(state.top_modal(), |el, modal| {
                el.child(self.render_modal(modal, palette))
            })
    }
}
