//! Colors - Light and Dark Palettes

use crate::states::NotificationKind;
use gpui::{Rgba, rgb};
use gpui_component::ThemeMode;

/// Resolved color palette for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Main background
    pub background: Rgba,
    /// Header, sidebar and card surfaces
    pub surface: Rgba,
    /// Modal backdrop
    pub backdrop: Rgba,
    pub text_primary: Rgba,
    pub text_muted: Rgba,
    pub border: Rgba,
    /// Brand accent
    pub accent: Rgba,
    pub success: Rgba,
    pub warning: Rgba,
    pub danger: Rgba,
    pub info: Rgba,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            background: rgb(0xf5f5f5),
            surface: rgb(0xffffff),
            backdrop: gpui::rgba(0x00000088),
            text_primary: rgb(0x1f2937),
            text_muted: rgb(0x6b7280),
            border: rgb(0xe5e7eb),
            accent: rgb(0x0f766e),
            success: rgb(0x22c55e),
            warning: rgb(0xf59e0b),
            danger: rgb(0xef4444),
            info: rgb(0x3b82f6),
        }
    }

    fn dark() -> Self {
        Self {
            background: rgb(0x111827),
            surface: rgb(0x1a2332),
            backdrop: gpui::rgba(0x000000bb),
            text_primary: rgb(0xf9fafb),
            text_muted: rgb(0x9ca3af),
            border: rgb(0x374151),
            accent: rgb(0x2cb3b8),
            success: rgb(0x4ade80),
            warning: rgb(0xfbbf24),
            danger: rgb(0xf87171),
            info: rgb(0x60a5fa),
        }
    }

    /// Accent color for a notification kind
    pub fn notification(&self, kind: NotificationKind) -> Rgba {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.danger,
            NotificationKind::Warning => self.warning,
            NotificationKind::Info => self.info,
        }
    }
}
