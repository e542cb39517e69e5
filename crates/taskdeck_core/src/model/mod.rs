//! Domain records owned by the task store and theme controller.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Theme has exactly two values and an explicit default.

pub mod task;
pub mod theme;
