//! Subcommand execution against the application state.
//!
//! Each command maps to one user intent; the caller renders afterwards.

use crate::render::{self, Palette};
use clap::{Subcommand, ValueEnum};
use taskdeck_core::{AppState, EditKey, SlotStore, StatusFilter, TaskId, CATEGORIES};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task (newest first).
    Add {
        #[arg(required = true)]
        title: Vec<String>,
        #[arg(long, short, default_value = taskdeck_core::DEFAULT_CATEGORY)]
        category: String,
    },
    /// Show tasks, optionally filtered.
    List {
        #[arg(long, short, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Flip a task between pending and completed.
    Toggle { id: String },
    /// Replace a task's title.
    Rename {
        id: String,
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Remove a task.
    Delete { id: String },
    /// Remove every completed task.
    ClearCompleted,
    /// Mark every task completed.
    MarkAll,
    /// Mark every task pending.
    UnmarkAll,
    /// Show total, completed and pending counts.
    Stats,
    /// List categories in use.
    Categories,
    /// Show or toggle the display theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

impl Command {
    /// Stable name for logs; arguments may contain task titles.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::List { .. } => "list",
            Self::Toggle { .. } => "toggle",
            Self::Rename { .. } => "rename",
            Self::Delete { .. } => "delete",
            Self::ClearCompleted => "clear-completed",
            Self::MarkAll => "mark-all",
            Self::UnmarkAll => "unmark-all",
            Self::Stats => "stats",
            Self::Categories => "categories",
            Self::Theme { .. } => "theme",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}

/// What the command produced for the terminal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Rendered output for stdout.
    pub output: String,
    /// Informational notices for stderr.
    pub notices: Vec<String>,
}

impl Outcome {
    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }
}

pub fn execute<S: SlotStore>(
    app: &mut AppState<'_, S>,
    command: Command,
    plain: bool,
) -> Outcome {
    let mut outcome = Outcome::default();

    match command {
        Command::Add { title, category } => {
            let form = app.form_mut();
            form.set_title(title.join(" "));
            if !form.select_category(&category) {
                outcome.notice(format!(
                    "unknown category `{category}`; expected one of {}; using {}",
                    CATEGORIES.join(", "),
                    form.category()
                ));
            }
            if app.submit_form().is_none() {
                outcome.notice("empty title; nothing added");
            }
        }
        Command::List { status, category } => {
            app.set_status_filter(status);
            app.set_category_filter(category);
        }
        Command::Toggle { id } => {
            if let Some(id) = resolve(app, &id, &mut outcome) {
                app.toggle(id);
            }
        }
        Command::Rename { id, title } => {
            if let Some(id) = resolve(app, &id, &mut outcome) {
                app.begin_edit(id);
                app.edit_input(title.join(" "));
                if !app.edit_key(EditKey::Confirm) {
                    outcome.notice("empty title; keeping the current one");
                }
            }
        }
        Command::Delete { id } => {
            if let Some(id) = resolve(app, &id, &mut outcome) {
                app.delete(id);
            }
        }
        Command::ClearCompleted => {
            let removed = app.delete_completed();
            outcome.notice(format!("removed {removed} completed task(s)"));
        }
        Command::MarkAll => {
            app.mark_all();
        }
        Command::UnmarkAll => {
            app.unmark_all();
        }
        Command::Stats => {
            let palette = palette_for(app, plain);
            outcome.output = render::render_counts(app.counts(), &palette);
            return outcome;
        }
        Command::Categories => {
            let palette = palette_for(app, plain);
            outcome.output = render::render_categories(&app.categories(), &palette);
            return outcome;
        }
        Command::Theme { action } => {
            if action == ThemeAction::Toggle {
                app.toggle_theme();
            }
            outcome.output = format!("theme: {}\n", app.theme());
            return outcome;
        }
    }

    let palette = palette_for(app, plain);
    outcome.output = render::render_board(app, &palette);
    outcome
}

fn palette_for<S: SlotStore>(app: &AppState<'_, S>, plain: bool) -> Palette {
    if plain {
        Palette::plain()
    } else {
        Palette::for_theme(app.theme())
    }
}

fn resolve<S: SlotStore>(
    app: &AppState<'_, S>,
    raw: &str,
    outcome: &mut Outcome,
) -> Option<TaskId> {
    let id = app.store().resolve_prefix(raw);
    if id.is_none() {
        outcome.notice(format!("no single task matches `{raw}`"));
    }
    id
}
