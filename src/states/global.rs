//! Global Store
//!
//! Binds the [`UiStore`] into GPUI: one `Entity<UiStore>` reachable from any
//! view via `cx.global::<UiGlobalStore>()`. Every update goes through
//! `Entity::update` followed by `cx.notify()` so observers re-render.

use super::notification::{NewNotification, NotificationId};
use super::settings::{MemoryStorage, SettingsStorage, TomlFileStorage};
use super::title::SharedTitle;
use super::ui::UiStore;
use gpui::{App, AppContext, Context, Entity, Global};
use tracing::{debug, error, info};

/// Global store accessible via `cx.global::<UiGlobalStore>()`
#[derive(Clone)]
pub struct UiGlobalStore {
    store: Entity<UiStore>,
    title: SharedTitle,
}

impl UiGlobalStore {
    /// Create the store entity backed by the on-disk settings file
    ///
    /// Falls back to in-memory settings when the config directory is unusable.
    pub fn init(cx: &mut App) -> Self {
        let storage: Box<dyn SettingsStorage> = match TomlFileStorage::open_default() {
            Ok(storage) => {
                info!(path = ?storage.path(), "Settings storage ready");
                Box::new(storage)
            }
            Err(e) => {
                error!(error = %e, "Settings unavailable, preferences will not persist");
                Box::new(MemoryStorage::new())
            }
        };

        let title = SharedTitle::new();
        let surface = title.clone();
        let store = cx.new(|_| UiStore::new(storage, surface));
        Self::new(store, title)
    }

    pub fn new(store: Entity<UiStore>, title: SharedTitle) -> Self {
        Self { store, title }
    }

    /// Get the store entity
    pub fn store(&self) -> Entity<UiStore> {
        self.store.clone()
    }

    /// Title slot the window shell drains into the window title
    pub fn title(&self) -> &SharedTitle {
        &self.title
    }

    /// Read the store
    pub fn read<'a>(&self, cx: &'a App) -> &'a UiStore {
        self.store.read(cx)
    }

    /// Update the store
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut UiStore, &mut Context<UiStore>) -> R,
    ) -> C::Result<R> {
        self.store.update(cx, update)
    }
}

impl Global for UiGlobalStore {}

/// Apply a transition to the global store and notify observers
pub fn update_ui<R>(cx: &mut App, mutation: impl FnOnce(&mut UiStore) -> R) -> R {
    let store = cx.global::<UiGlobalStore>().store();
    store.update(cx, |store, cx| {
        let result = mutation(store);
        cx.notify();
        result
    })
}

/// Queue a notification and schedule its auto-dismiss
pub fn push_notification(cx: &mut App, request: NewNotification) -> NotificationId {
    let store = cx.global::<UiGlobalStore>().store();

    let (id, dismiss_after) = store.update(cx, |store, cx| {
        let id = store.add_notification(request);
        cx.notify();
        let dismiss_after = store
            .state()
            .notification(id)
            .and_then(|notification| notification.auto_dismiss());
        (id, dismiss_after)
    });

    if let Some(delay) = dismiss_after {
        cx.spawn(async move |cx| {
            cx.background_executor().timer(delay).await;

            // Already removed by the user: remove_notification is a no-op
            let result = store.update(cx, |store, cx| {
                store.remove_notification(id);
                cx.notify();
            });
            if result.is_err() {
                debug!(id = id.0, "App gone before notification auto-dismiss");
            }
        })
        .detach();
    }

    id
}
