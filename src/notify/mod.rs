//! Notification module.
//!
//! Provides:
//! - Sync event definitions
//! - The `Notifier` trait and presenter-task dispatch
//! - A console notifier with progress bar output

pub mod console;
pub mod event;
pub mod notifier;

pub use console::ConsoleNotifier;
pub use event::SyncEvent;
pub use notifier::{spawn_presenter, Notifier, NotifierHandle};
