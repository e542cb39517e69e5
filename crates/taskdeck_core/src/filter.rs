//! Pure projections over the task list.
//!
//! # Invariants
//! - Outputs preserve store order.
//! - Status and category filters compose with logical AND.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Completion-state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusFilter(pub String);

impl Display for UnknownStatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown status filter `{}`; expected all|completed|pending",
            self.0
        )
    }
}

impl Error for UnknownStatusFilter {}

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => Err(UnknownStatusFilter(other.to_string())),
        }
    }
}

/// Returns the tasks matching both filters, in store order.
///
/// `category = None` keeps every category; otherwise only exact matches.
pub fn visible<'a>(
    tasks: &'a [Task],
    status: StatusFilter,
    category: Option<&str>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| status.matches(task))
        .filter(|task| category.map_or(true, |wanted| task.category == wanted))
        .collect()
}

/// Non-empty categories in order of first appearance.
pub fn distinct_categories(tasks: &[Task]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for task in tasks {
        let category = task.category.as_str();
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Live counters shown next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskCounts {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::{counts, distinct_categories, visible, StatusFilter, TaskCounts};
    use crate::model::task::Task;

    fn task(title: &str, category: &str, completed: bool) -> Task {
        let mut task = Task::new(title, category);
        task.completed = completed;
        task
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|task| task.title.clone()).collect()
    }

    #[test]
    fn status_and_category_compose_with_and() {
        let tasks = vec![
            task("report", "Work", true),
            task("groceries", "General", true),
            task("standup", "Work", false),
            task("invoice", "Work", true),
        ];

        let work_done = visible(&tasks, StatusFilter::Completed, Some("Work"));
        assert_eq!(titles(&work_done), ["report", "invoice"]);

        let pending = visible(&tasks, StatusFilter::Pending, None);
        assert_eq!(titles(&pending), ["standup"]);

        let all = visible(&tasks, StatusFilter::All, None);
        assert_eq!(all.len(), tasks.len());
    }

    #[test]
    fn category_filter_is_exact_match() {
        let tasks = vec![task("a", "Work", false), task("b", "work", false)];
        let matched = visible(&tasks, StatusFilter::All, Some("Work"));
        assert_eq!(titles(&matched), ["a"]);
        assert!(visible(&tasks, StatusFilter::All, Some("Home")).is_empty());
    }

    #[test]
    fn distinct_categories_skip_empty_and_keep_first_seen_order() {
        let tasks = vec![
            task("a", "Work", false),
            task("b", "", false),
            task("c", "General", false),
            task("d", "Work", true),
        ];
        assert_eq!(distinct_categories(&tasks), ["Work", "General"]);
    }

    #[test]
    fn counts_split_completed_and_pending() {
        let tasks = vec![task("a", "Work", true), task("b", "Work", false)];
        assert_eq!(
            counts(&tasks),
            TaskCounts {
                total: 2,
                completed: 1,
                pending: 1
            }
        );
        assert_eq!(counts(&[]), TaskCounts::default());
    }

    #[test]
    fn status_filter_parses_its_display_form() {
        for filter in [
            StatusFilter::All,
            StatusFilter::Completed,
            StatusFilter::Pending,
        ] {
            assert_eq!(filter.to_string().parse::<StatusFilter>(), Ok(filter));
        }
        assert!("done".parse::<StatusFilter>().is_err());
    }
}
