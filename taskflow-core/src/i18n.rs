//! Static translation table for the two supported UI languages.
//!
//! Lookups are total: an unrecognized key is returned verbatim, so a
//! missing translation can never fail a render.

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian (the server's default locale)
    #[default]
    Ru,
    /// English
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

/// `(key, russian, english)` entries, one per UI string.
const TABLE: &[(&str, &str, &str)] = &[
    ("status_created", "Создана", "Created"),
    ("status_in_progress", "В работе", "In progress"),
    ("status_completed", "Завершена", "Completed"),
    ("no_tasks", "Задач нет.", "No tasks found."),
    ("task_added", "Задача добавлена.", "Task added."),
    ("task_deleted", "Задача удалена.", "Task deleted."),
    ("task_updated", "Статус задачи обновлён.", "Task status updated."),
    (
        "task_already_completed",
        "Задача уже завершена.",
        "Task is already completed.",
    ),
    ("login_success", "Вход выполнен.", "Logged in."),
    (
        "register_success",
        "Регистрация успешна. Теперь войдите.",
        "Registered successfully. Now log in.",
    ),
    ("logout_success", "Выход выполнен.", "Logged out."),
    (
        "credentials_required",
        "Введите имя пользователя и пароль!",
        "Username and password are required!",
    ),
    (
        "title_required",
        "Введите название задачи!",
        "Task title is required!",
    ),
    ("server_error", "Ошибка сервера", "Server error"),
    (
        "not_logged_in",
        "Сначала войдите в систему.",
        "You are not logged in.",
    ),
    ("confirm_delete", "Удалить задачу?", "Delete this task?"),
    ("cancelled", "Отменено.", "Cancelled."),
    (
        "notifications_enabled",
        "Уведомления включены.",
        "Desktop notifications enabled.",
    ),
    (
        "notifications_disabled",
        "Уведомления выключены.",
        "Desktop notifications disabled.",
    ),
    (
        "notifications_denied",
        "Не удалось включить уведомления.",
        "Could not enable desktop notifications.",
    ),
    ("notification_probe_title", "TaskFlow", "TaskFlow"),
    (
        "notification_probe_body",
        "Уведомления работают!",
        "Notifications are working!",
    ),
    (
        "link_hint",
        "Чтобы получать уведомления в Telegram, отправьте боту команду:",
        "To receive Telegram notifications, send the bot:",
    ),
    ("theme_set", "Тема сохранена.", "Theme saved."),
    ("language_set", "Язык сохранён.", "Language saved."),
    ("due", "Срок", "Due"),
    ("created_at", "Создана", "Created"),
    ("total", "всего", "total"),
    ("done", "завершено", "done"),
    ("overdue", "просрочено", "overdue"),
    ("server_ok", "Сервер доступен.", "Server is up."),
];

/// Look up the localized string for `key`.
///
/// Unknown keys come back unchanged.
pub fn tr<'a>(lang: Language, key: &'a str) -> &'a str {
    for (k, ru, en) in TABLE {
        if *k == key {
            return match lang {
                Language::Ru => *ru,
                Language::En => *en,
            };
        }
    }
    key
}
