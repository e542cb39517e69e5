//! Terminal rendering of the application state.
//!
//! Output is built as a `String` so the theme and layout can be tested
//! without a terminal.

use std::fmt::Write as _;
use taskdeck_core::{AppState, SlotStore, Task, TaskCounts, Theme};

const RESET: &str = "\x1b[0m";
const ID_WIDTH: usize = 8;

/// ANSI styles for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    heading: &'static str,
    text: &'static str,
    done: &'static str,
    muted: &'static str,
    accent: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: "\x1b[1;34m",
                text: "\x1b[30m",
                done: "\x1b[2;9;30m",
                muted: "\x1b[90m",
                accent: "\x1b[34m",
            },
            Theme::Dark => Self {
                heading: "\x1b[1;96m",
                text: "\x1b[97m",
                done: "\x1b[2;9;37m",
                muted: "\x1b[37m",
                accent: "\x1b[36m",
            },
        }
    }

    pub fn plain() -> Self {
        Self {
            heading: "",
            text: "",
            done: "",
            muted: "",
            accent: "",
        }
    }

    fn paint(&self, style: &str, value: &str) -> String {
        if style.is_empty() {
            value.to_string()
        } else {
            format!("{style}{value}{RESET}")
        }
    }
}

/// Filter header, visible list and the sidebar counters.
pub fn render_board<S: SlotStore>(app: &AppState<'_, S>, palette: &Palette) -> String {
    let mut out = String::new();
    let category = app.category_filter().unwrap_or("all categories");
    let _ = writeln!(
        out,
        "{}",
        palette.paint(
            palette.heading,
            &format!("To-do list [{} / {}]", app.status_filter(), category)
        )
    );

    let visible = app.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "  {}", palette.paint(palette.muted, "No tasks yet."));
    }
    for task in visible {
        let _ = writeln!(out, "{}", render_task(task, palette));
    }

    out.push_str(&render_counts(app.counts(), palette));
    out
}

pub fn render_task(task: &Task, palette: &Palette) -> String {
    let id = task.id.to_string();
    let (mark, style) = if task.completed {
        ("[x]", palette.done)
    } else {
        ("[ ]", palette.text)
    };
    format!(
        "  {} {} {} {}",
        palette.paint(palette.muted, &id[..ID_WIDTH]),
        mark,
        palette.paint(style, &single_line(&task.title)),
        palette.paint(palette.accent, &format!("({})", task.category)),
    )
}

// Control characters (newlines, ESC) in a title would break the row layout.
fn single_line(title: &str) -> String {
    title
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

pub fn render_counts(counts: TaskCounts, palette: &Palette) -> String {
    format!(
        "{}\n",
        palette.paint(
            palette.muted,
            &format!(
                "Total: {}  Completed: {}  Pending: {}",
                counts.total, counts.completed, counts.pending
            )
        )
    )
}

pub fn render_categories(categories: &[&str], palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.paint(palette.heading, "Categories"));
    if categories.is_empty() {
        let _ = writeln!(out, "  {}", palette.paint(palette.muted, "none"));
    }
    for category in categories {
        let _ = writeln!(out, "  {}", palette.paint(palette.accent, category));
    }
    out
}
