//! TaskFlow Core - Pure domain logic for the TaskFlow client
//!
//! This crate contains no I/O operations. Network access and
//! persistence are handled by adapters in consuming crates.

pub mod error;
pub mod i18n;
pub mod settings;
pub mod task;
pub mod view;

pub use error::{CoreError, Result};
pub use i18n::{Language, tr};
pub use settings::Theme;
pub use task::{NewTask, Task, TaskStatus, parse_due_date};
pub use view::{Section, ViewState};
