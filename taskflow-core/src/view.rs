//! Transient view-state machine.
//!
//! Mirrors the two top-level UI modes: unauthenticated (`Auth`) and
//! authenticated (`App`), with a visible section inside `App`. Section
//! switches are pure local updates; only a successful login moves
//! `Auth` to `App` and only a logout moves back.

/// Visible section inside the authenticated view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tasks,
    Settings,
}

/// Top-level UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Auth,
    App(Section),
}

impl ViewState {
    /// Initial state: `App` only when a stored session token exists.
    pub fn initial(has_session: bool) -> Self {
        if has_session {
            ViewState::App(Section::Tasks)
        } else {
            ViewState::Auth
        }
    }

    /// The only `Auth` → `App` transition.
    pub fn login_succeeded(&mut self) {
        if *self == ViewState::Auth {
            *self = ViewState::App(Section::Tasks);
        }
    }

    /// The only `App` → `Auth` transition.
    pub fn logout(&mut self) {
        *self = ViewState::Auth;
    }

    /// Switch the visible section. Returns `false` (and does nothing)
    /// outside the authenticated view.
    pub fn show(&mut self, section: Section) -> bool {
        match self {
            ViewState::App(current) => {
                *current = section;
                true
            }
            ViewState::Auth => false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::App(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_follows_stored_session() {
        assert_eq!(ViewState::initial(false), ViewState::Auth);
        assert_eq!(ViewState::initial(true), ViewState::App(Section::Tasks));
    }

    #[test]
    fn test_login_is_the_only_way_in() {
        let mut view = ViewState::Auth;
        assert!(!view.show(Section::Settings));
        assert_eq!(view, ViewState::Auth);

        view.login_succeeded();
        assert_eq!(view, ViewState::App(Section::Tasks));
    }

    #[test]
    fn test_section_switch_is_local_to_app() {
        let mut view = ViewState::initial(true);
        assert!(view.show(Section::Settings));
        assert_eq!(view, ViewState::App(Section::Settings));
        assert!(view.show(Section::Tasks));
        assert_eq!(view, ViewState::App(Section::Tasks));
    }

    #[test]
    fn test_logout_returns_to_auth() {
        let mut view = ViewState::initial(true);
        view.logout();
        assert_eq!(view, ViewState::Auth);
        assert!(!view.is_authenticated());
    }
}
