//! Stateful services that own persisted application state.
//!
//! # Responsibility
//! - Hold the single in-memory copy of tasks and theme.
//! - Mirror every mutation to its durable slot before returning.

pub mod task_store;
pub mod theme_controller;
