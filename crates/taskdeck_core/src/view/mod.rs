//! Presentation state between the user surface and the services.
//!
//! # Responsibility
//! - Hold transient UI buffers (creation form, inline edit).
//! - Hold the active filters and expose the derived view.
//! - Forward user intents to `TaskStore` / `ThemeController` unchanged.
//!
//! # Invariants
//! - Buffers never own a `Task`; they carry ids and candidate strings only.
//! - At most one inline edit is active at a time.

pub mod app;
pub mod edit;
pub mod form;
