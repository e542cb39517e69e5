//! Durable key-value slots.
//!
//! # Responsibility
//! - Provide named string slots that survive restarts.
//! - Keep storage details behind the `SlotStore` contract.
//!
//! # Invariants
//! - `set` fully replaces the previous value of a slot.
//! - Reading a slot that was never written yields `None`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySlotStore;
pub use sqlite::SqliteSlotStore;

/// Slot holding the serialized task list.
pub const TASKS_SLOT: &str = "tasks";
/// Slot holding the serialized theme.
pub const THEME_SLOT: &str = "theme";

pub type SlotResult<T> = Result<T, SlotError>;

#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "slot storage failed: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named string slots with get/set semantics.
pub trait SlotStore {
    fn get(&self, key: &str) -> SlotResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SlotResult<()>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        (**self).set(key, value)
    }
}
