use super::{SlotResult, SlotStore};
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local slots. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot, e.g. with hand-written or corrupt content in tests.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
