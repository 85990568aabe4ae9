use std::time::{Duration, Instant};

const INFO_DURATION: Duration = Duration::from_millis(1500);
const ERROR_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

/// At most one visible notification; a newer one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_at(message, NotificationKind::Info, Instant::now());
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_at(message, NotificationKind::Error, Instant::now());
    }

    pub fn show_at(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        let duration = match kind {
            NotificationKind::Info => INFO_DURATION,
            NotificationKind::Error => ERROR_DURATION,
        };
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            expires_at: now + duration,
        });
    }

    /// Drop the notification once it has expired
    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_info() {
        let mut state = NotificationState::new();
        state.show("Copied romaji!");

        let current = state.current().unwrap();
        assert_eq!(current.message, "Copied romaji!");
        assert_eq!(current.kind, NotificationKind::Info);
    }

    #[test]
    fn test_newer_replaces_older() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show_error("second");

        assert_eq!(state.current().unwrap().message, "second");
        assert_eq!(state.current().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_info_expires() {
        let now = Instant::now();
        let mut state = NotificationState::new();
        state.show_at("hi", NotificationKind::Info, now);

        state.expire(now + Duration::from_millis(1000));
        assert!(state.is_visible());

        state.expire(now + INFO_DURATION);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_errors_last_longer() {
        let now = Instant::now();
        let mut state = NotificationState::new();
        state.show_at("failed", NotificationKind::Error, now);

        state.expire(now + INFO_DURATION);
        assert!(state.is_visible());

        state.expire(now + ERROR_DURATION);
        assert!(!state.is_visible());
    }
}
