//! Application state container.
//!
//! # Responsibility
//! - Own the task store, theme controller, filters and UI buffers.
//! - Translate user intents into store/theme calls.
//! - Derive the visible list, category list and counters on demand.
//!
//! # Invariants
//! - Derived views are recomputed from the store on every read.
//! - Beginning a new inline edit commits the previous one (blur).

use crate::filter::{self, StatusFilter, TaskCounts};
use crate::model::task::{Task, TaskId};
use crate::model::theme::Theme;
use crate::service::task_store::TaskStore;
use crate::service::theme_controller::ThemeController;
use crate::slot::SlotStore;
use crate::view::edit::{EditKey, InlineEdit};
use crate::view::form::TaskForm;

pub struct AppState<'s, S: SlotStore> {
    store: TaskStore<&'s S>,
    theme: ThemeController<&'s S>,
    status_filter: StatusFilter,
    category_filter: Option<String>,
    form: TaskForm,
    editing: Option<InlineEdit>,
}

impl<'s, S: SlotStore> AppState<'s, S> {
    /// Loads tasks and theme from `slots` with default filters.
    pub fn load(slots: &'s S) -> Self {
        Self {
            store: TaskStore::load(slots),
            theme: ThemeController::load(slots),
            status_filter: StatusFilter::default(),
            category_filter: None,
            form: TaskForm::default(),
            editing: None,
        }
    }

    pub fn store(&self) -> &TaskStore<&'s S> {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn visible(&self) -> Vec<&Task> {
        filter::visible(
            self.store.tasks(),
            self.status_filter,
            self.category_filter.as_deref(),
        )
    }

    pub fn categories(&self) -> Vec<&str> {
        filter::distinct_categories(self.store.tasks())
    }

    pub fn counts(&self) -> TaskCounts {
        filter::counts(self.store.tasks())
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category_filter = category;
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn submit_form(&mut self) -> Option<TaskId> {
        self.form.submit(&mut self.store)
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.store.toggle_completed(id)
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.editing.as_ref().map(InlineEdit::task_id) == Some(id) {
            self.editing = None;
        }
        self.store.delete(id)
    }

    pub fn delete_completed(&mut self) -> usize {
        self.store.delete_completed()
    }

    pub fn mark_all(&mut self) -> usize {
        self.store.set_all_completed(true)
    }

    pub fn unmark_all(&mut self) -> usize {
        self.store.set_all_completed(false)
    }

    pub fn editing(&self) -> Option<&InlineEdit> {
        self.editing.as_ref()
    }

    /// Opens the inline editor on `id`; unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if self.editing.as_ref().map(InlineEdit::task_id) == Some(id) {
            return true;
        }
        let Some(task) = self.store.get(id) else {
            return false;
        };
        let edit = InlineEdit::begin(task);
        self.blur_edit();
        self.editing = Some(edit);
        true
    }

    pub fn edit_input(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.input(text);
        }
    }

    /// Confirm commits, cancel discards; both close the editor.
    pub fn edit_key(&mut self, key: EditKey) -> bool {
        match self.editing.take() {
            Some(edit) => edit.handle_key(key, &mut self.store),
            None => false,
        }
    }

    /// Focus left the editor: same as confirm.
    pub fn blur_edit(&mut self) -> bool {
        self.edit_key(EditKey::Confirm)
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }
}
