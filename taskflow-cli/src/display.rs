//! Task list rendering
//!
//! Builds the full textual list from the last fetched snapshot on every
//! call. Colors follow the stored theme; all labels go through the
//! translation table.

use chrono::NaiveDate;
use colored::{Color, Colorize};

use taskflow_core::{Language, Task, TaskStatus, Theme, tr};

/// Check if terminal supports colors
pub fn supports_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn id_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Cyan,
        Theme::Dark => Color::BrightCyan,
    }
}

fn status_color(status: TaskStatus, theme: Theme) -> Color {
    match (status, theme) {
        (TaskStatus::Completed, Theme::Light) => Color::Green,
        (TaskStatus::Completed, Theme::Dark) => Color::BrightGreen,
        (TaskStatus::InProgress, Theme::Light) => Color::Yellow,
        (TaskStatus::InProgress, Theme::Dark) => Color::BrightYellow,
        (TaskStatus::Created, Theme::Light) => Color::Blue,
        (TaskStatus::Created, Theme::Dark) => Color::BrightBlue,
    }
}

fn created_at_format(lang: Language) -> &'static str {
    match lang {
        Language::Ru => "%d.%m.%Y %H:%M",
        Language::En => "%Y-%m-%d %H:%M",
    }
}

/// Render the whole list, or the localized placeholder when empty.
pub fn format_task_list(
    tasks: &[Task],
    lang: Language,
    theme: Theme,
    today: NaiveDate,
    use_color: bool,
) -> String {
    if tasks.is_empty() {
        return tr(lang, "no_tasks").to_string();
    }

    let mut lines: Vec<String> = tasks
        .iter()
        .map(|task| format_task(task, lang, theme, today, use_color))
        .collect();

    lines.push(String::new());
    lines.push(format_summary(
        tasks.len(),
        tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
        tasks.iter().filter(|t| t.is_overdue(today)).count(),
        lang,
        use_color,
    ));

    lines.join("\n")
}

/// Format one task card: status marker, id, title, optional due date,
/// localized status label, then indented description and creation date.
pub fn format_task(
    task: &Task,
    lang: Language,
    theme: Theme,
    today: NaiveDate,
    use_color: bool,
) -> String {
    let marker = match task.status {
        TaskStatus::Created => "[ ]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Completed => "[✓]",
    };

    let id_str = if use_color {
        format!("[{}]", task.id).color(id_color(theme)).to_string()
    } else {
        format!("[{}]", task.id)
    };

    let title = if use_color && task.status == TaskStatus::Completed {
        task.title.color(status_color(task.status, theme)).to_string()
    } else {
        task.title.clone()
    };

    let due_str = match task.due_date {
        Some(due) => {
            let text = format!("({}: {})", tr(lang, "due"), due.format("%Y-%m-%d"));
            if use_color && task.is_overdue(today) {
                text.red().bold().to_string()
            } else {
                text
            }
        }
        None => String::new(),
    };

    let label = tr(lang, task.status.label_key());
    let label = if use_color {
        label.color(status_color(task.status, theme)).to_string()
    } else {
        label.to_string()
    };

    let mut line = format!("{marker} {id_str} {title}");
    if !due_str.is_empty() {
        line.push(' ');
        line.push_str(&due_str);
    }
    line.push_str(&format!(" - {label}"));

    let mut lines = vec![line];
    if let Some(description) = &task.description
        && !description.is_empty()
    {
        lines.push(format!("    {description}"));
    }
    lines.push(format!(
        "    {}: {}",
        tr(lang, "created_at"),
        task.created_at.format(created_at_format(lang))
    ));

    lines.join("\n")
}

/// Format a summary line for the task list
pub fn format_summary(
    total: usize,
    completed: usize,
    overdue: usize,
    lang: Language,
    use_color: bool,
) -> String {
    let parts = vec![
        format!("{} {}", total, tr(lang, "total")),
        if use_color {
            format!("{} {}", completed, tr(lang, "done"))
                .green()
                .to_string()
        } else {
            format!("{} {}", completed, tr(lang, "done"))
        },
        if overdue > 0 {
            if use_color {
                format!("{} {}", overdue, tr(lang, "overdue"))
                    .red()
                    .to_string()
            } else {
                format!("{} {}", overdue, tr(lang, "overdue"))
            }
        } else {
            String::new()
        },
    ];

    let summary: Vec<&str> = parts
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.as_str())
        .collect();

    format!("[{}]", summary.join(" | "))
}
