//! Creation form buffer.

use crate::model::task::{known_category, TaskId, DEFAULT_CATEGORY};
use crate::service::task_store::TaskStore;
use crate::slot::SlotStore;

/// Title input plus category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    category: &'static str,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: DEFAULT_CATEGORY,
        }
    }
}

impl TaskForm {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        self.category
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Selects one of the fixed categories; other values are ignored.
    pub fn select_category(&mut self, category: &str) -> bool {
        match known_category(category) {
            Some(known) => {
                self.category = known;
                true
            }
            None => false,
        }
    }

    /// Sends the buffered task to the store and resets the form.
    ///
    /// A blank title leaves both the store and the form untouched.
    pub fn submit<S: SlotStore>(&mut self, store: &mut TaskStore<S>) -> Option<TaskId> {
        if self.title.trim().is_empty() {
            return None;
        }
        let id = store.create(&self.title, self.category);
        *self = Self::default();
        id
    }
}

#[cfg(test)]
mod tests {
    use super::TaskForm;
    use crate::service::task_store::TaskStore;
    use crate::slot::MemorySlotStore;

    #[test]
    fn submit_creates_task_and_resets_form() {
        let slots = MemorySlotStore::new();
        let mut store = TaskStore::load(&slots);
        let mut form = TaskForm::default();

        form.set_title("Pay bills");
        assert!(form.select_category("Work"));
        let id = form.submit(&mut store).expect("task should be created");

        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Pay bills");
        assert_eq!(task.category, "Work");
        assert_eq!(form.title(), "");
        assert_eq!(form.category(), "General");
    }

    #[test]
    fn blank_submit_keeps_form_state() {
        let slots = MemorySlotStore::new();
        let mut store = TaskStore::load(&slots);
        let mut form = TaskForm::default();

        form.set_title("   ");
        form.select_category("Study");
        assert_eq!(form.submit(&mut store), None);

        assert!(store.is_empty());
        assert_eq!(form.title(), "   ");
        assert_eq!(form.category(), "Study");
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut form = TaskForm::default();
        assert!(!form.select_category("Errands"));
        assert_eq!(form.category(), "General");
    }
}
