//! Ordered task list persisted in the `tasks` slot.
//!
//! # Responsibility
//! - Own every `Task` record for the lifetime of the application.
//! - Expose the only mutators allowed to change the list.
//! - Write the whole list back to the slot after each mutation.
//!
//! # Invariants
//! - Ids are unique; new tasks are prepended (newest first).
//! - Mutators never return errors: blank titles and unknown ids are no-ops.
//! - A missing or malformed slot loads as an empty list.
//! - A failed slot write is logged and the in-memory list is kept.

use crate::model::task::{Task, TaskId};
use crate::slot::{SlotStore, TASKS_SLOT};
use log::{debug, error, info, warn};
use std::collections::HashSet;

pub struct TaskStore<S: SlotStore> {
    slots: S,
    tasks: Vec<Task>,
}

impl<S: SlotStore> TaskStore<S> {
    /// Rehydrates the list from the `tasks` slot.
    pub fn load(slots: S) -> Self {
        let tasks = match slots.get(TASKS_SLOT) {
            Ok(Some(raw)) => parse_tasks(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=tasks_load module=task_store status=error error={err}");
                Vec::new()
            }
        };
        info!(
            "event=tasks_load module=task_store status=ok count={}",
            tasks.len()
        );
        Self { slots, tasks }
    }

    /// Tasks in store order (newest first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolves a full id or a unique id prefix (case-insensitive).
    ///
    /// Returns `None` when nothing or more than one task matches.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<TaskId> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .tasks
            .iter()
            .filter(|task| task.id.to_string().starts_with(&prefix));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.id)
    }

    /// Prepends a new pending task.
    ///
    /// Blank or whitespace-only titles are ignored and nothing is persisted.
    pub fn create(&mut self, title: &str, category: &str) -> Option<TaskId> {
        if title.trim().is_empty() {
            debug!("event=task_create module=task_store status=skip reason=blank_title");
            return None;
        }

        let task = Task::new(title, category);
        let id = task.id;
        self.tasks.insert(0, task);
        info!("event=task_create module=task_store status=ok id={id}");
        self.persist();
        Some(id)
    }

    /// Flips `completed`; returns the new flag, or `None` for unknown ids.
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let completed = self.task_mut(id).map(|task| {
            task.completed = !task.completed;
            task.completed
        });
        debug!(
            "event=task_toggle module=task_store status={} id={id}",
            outcome(completed.is_some())
        );
        self.persist();
        completed
    }

    /// Replaces the title with the trimmed `new_title`.
    ///
    /// A blank `new_title` keeps the current title; returns whether a task
    /// was renamed.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> bool {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            debug!("event=task_rename module=task_store status=skip reason=blank_title id={id}");
            return false;
        }

        let renamed = match self.task_mut(id) {
            Some(task) => {
                task.title = trimmed.to_string();
                true
            }
            None => false,
        };
        debug!(
            "event=task_rename module=task_store status={} id={id}",
            outcome(renamed)
        );
        self.persist();
        renamed
    }

    /// Removes one task; returns whether it existed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let deleted = self.tasks.len() != before;
        debug!(
            "event=task_delete module=task_store status={} id={id}",
            outcome(deleted)
        );
        self.persist();
        deleted
    }

    /// Removes every completed task; returns how many were removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        info!("event=tasks_delete_completed module=task_store status=ok removed={removed}");
        self.persist();
        removed
    }

    /// Sets `completed = value` on every task; returns how many changed.
    pub fn set_all_completed(&mut self, value: bool) -> usize {
        let mut changed = 0;
        for task in &mut self.tasks {
            if task.completed != value {
                task.completed = value;
                changed += 1;
            }
        }
        info!(
            "event=tasks_set_all module=task_store status=ok completed={value} changed={changed}"
        );
        self.persist();
        changed
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=tasks_persist module=task_store status=error stage=encode error={err}");
                return;
            }
        };
        if let Err(err) = self.slots.set(TASKS_SLOT, &raw) {
            error!("event=tasks_persist module=task_store status=error stage=write error={err}");
        }
    }
}

// Keeps the first record for each id so the loaded list honors id uniqueness.
fn parse_tasks(raw: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(parsed) => {
            let mut seen = HashSet::with_capacity(parsed.len());
            let mut tasks = Vec::with_capacity(parsed.len());
            for task in parsed {
                if seen.insert(task.id) {
                    tasks.push(task);
                } else {
                    warn!(
                        "event=tasks_load module=task_store status=skip reason=duplicate_id id={}",
                        task.id
                    );
                }
            }
            tasks
        }
        Err(err) => {
            warn!(
                "event=tasks_load module=task_store status=error reason=malformed_slot error={err}"
            );
            Vec::new()
        }
    }
}

fn outcome(applied: bool) -> &'static str {
    if applied {
        "ok"
    } else {
        "skip"
    }
}
