//! Core state management for taskdeck.
//! This crate owns the task list, its persistence and the view state.

pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod service;
pub mod slot;
pub mod view;

pub use filter::{counts, distinct_categories, visible, StatusFilter, TaskCounts};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, CATEGORIES, DEFAULT_CATEGORY};
pub use model::theme::Theme;
pub use service::task_store::TaskStore;
pub use service::theme_controller::ThemeController;
pub use slot::{
    MemorySlotStore, SlotError, SlotResult, SlotStore, SqliteSlotStore, TASKS_SLOT, THEME_SLOT,
};
pub use view::app::AppState;
pub use view::edit::{EditKey, InlineEdit};
pub use view::form::TaskForm;
