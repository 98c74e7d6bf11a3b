//! Desktop notification probe
//!
//! Enabling notifications sends one localized test notification. If the
//! desktop refuses to show it, the caller rolls the setting back.

use notify_rust::Notification;

use taskflow_core::{Language, tr};

use crate::config::APP_NAME;
use crate::error::{CliError, Result};

pub fn probe(lang: Language) -> Result<()> {
    Notification::new()
        .appname(APP_NAME)
        .summary(tr(lang, "notification_probe_title"))
        .body(tr(lang, "notification_probe_body"))
        .show()
        .map(|_| ())
        .map_err(|e| CliError::notification_with_source(tr(lang, "notifications_denied"), e))
}
