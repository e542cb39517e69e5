//! Per-item inline rename buffer.

use crate::model::task::{Task, TaskId};
use crate::service::task_store::TaskStore;
use crate::slot::SlotStore;

/// Keys the inline editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Enter: commit the candidate.
    Confirm,
    /// Escape: drop the candidate.
    Cancel,
}

/// Candidate title for one task while it is being edited.
///
/// Consumed by `commit` or `cancel`; the store keeps the committed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    task_id: TaskId,
    candidate: String,
}

impl InlineEdit {
    /// Starts editing with the task's current title as the candidate.
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            candidate: task.title.clone(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.candidate = text.into();
    }

    /// Forwards a non-blank candidate to `rename`; a blank one is discarded.
    pub fn commit<S: SlotStore>(self, store: &mut TaskStore<S>) -> bool {
        let trimmed = self.candidate.trim();
        if trimmed.is_empty() {
            return false;
        }
        store.rename(self.task_id, trimmed)
    }

    pub fn cancel(self) {}

    /// Applies `key`; both keys end the edit.
    pub fn handle_key<S: SlotStore>(self, key: EditKey, store: &mut TaskStore<S>) -> bool {
        match key {
            EditKey::Confirm => self.commit(store),
            EditKey::Cancel => {
                self.cancel();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditKey, InlineEdit};
    use crate::service::task_store::TaskStore;
    use crate::slot::MemorySlotStore;

    #[test]
    fn confirm_commits_trimmed_candidate() {
        let slots = MemorySlotStore::new();
        let mut store = TaskStore::load(&slots);
        let id = store.create("draft", "General").unwrap();

        let mut edit = InlineEdit::begin(store.get(id).unwrap());
        assert_eq!(edit.candidate(), "draft");
        edit.input("  final  ");
        assert!(edit.handle_key(EditKey::Confirm, &mut store));

        assert_eq!(store.get(id).unwrap().title, "final");
    }

    #[test]
    fn cancel_and_blank_commit_keep_committed_title() {
        let slots = MemorySlotStore::new();
        let mut store = TaskStore::load(&slots);
        let id = store.create("keep me", "General").unwrap();

        let mut edit = InlineEdit::begin(store.get(id).unwrap());
        edit.input("changed");
        assert!(!edit.handle_key(EditKey::Cancel, &mut store));
        assert_eq!(store.get(id).unwrap().title, "keep me");

        let mut edit = InlineEdit::begin(store.get(id).unwrap());
        edit.input("   ");
        assert!(!edit.commit(&mut store));
        assert_eq!(store.get(id).unwrap().title, "keep me");
    }
}
