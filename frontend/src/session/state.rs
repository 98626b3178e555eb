//! Pure session state.
//!
//! `is_authenticated` is derived from the presence of a user, so the
//! "authenticated iff user is non-null" invariant holds for every possible
//! sequence of transitions by construction.

use common::model::user::User;

/// The identity state held for the lifetime of the application instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Option<User>,
    is_loading: bool,
}

impl Session {
    /// Initial state: identity unknown, status check outstanding.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Settles a status check, login, or signup. Always ends the loading
    /// state, regardless of outcome.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.is_loading = false;
    }

    /// Marks the session as being re-validated.
    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
    }

    /// Local teardown after logout. Unconditional: runs even when the logout
    /// request itself failed.
    pub fn clear(&mut self) {
        self.user = None;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: "a@b.com".into(),
            username: "a".into(),
        }
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let session = Session::loading();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn successful_login_authenticates() {
        let mut session = Session::loading();
        session.resolve(Some(user()));
        assert!(!session.is_loading());
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id), Some(1));
    }

    #[test]
    fn failed_check_resolves_unauthenticated() {
        let mut session = Session::loading();
        session.resolve(None);
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn authenticated_matches_user_presence_across_sequences() {
        let mut session = Session::loading();
        let steps: [&dyn Fn(&mut Session); 5] = [
            &|s| s.resolve(Some(user())),
            &|s| s.begin_refresh(),
            &|s| s.resolve(None),
            &|s| s.resolve(Some(user())),
            &|s| s.clear(),
        ];
        for step in steps {
            step(&mut session);
            assert_eq!(session.is_authenticated(), session.user().is_some());
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn refresh_keeps_user_until_resolved() {
        let mut session = Session::loading();
        session.resolve(Some(user()));
        session.begin_refresh();
        assert!(session.is_loading());
        assert!(session.is_authenticated());
    }
}
