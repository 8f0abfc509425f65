//! State Management Layer
//!
//! The UI state store and the collaborators it talks to. Follows a
//! unidirectional data flow:
//!
//! ```text
//! UI Action → UiStore transition → cx.notify → observers re-render
//! ```

mod global;
mod modal;
mod notification;
mod settings;
mod title;
mod ui;

pub use global::*;
pub use modal::*;
pub use notification::*;
pub use settings::*;
pub use title::*;
pub use ui::*;
