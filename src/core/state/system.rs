/// Ticks a status message stays on screen (three seconds at the default rate)
pub const STATUS_TICKS: u8 = 12;

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    status_ticks_left: u8,
}

impl SystemState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks_left = STATUS_TICKS;
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
        self.status_ticks_left = 0;
    }

    /// Counts down the status message and clears it once expired.
    pub fn tick(&mut self) {
        if self.status_message.is_none() {
            return;
        }
        self.status_ticks_left = self.status_ticks_left.saturating_sub(1);
        if self.status_ticks_left == 0 {
            self.clear_status_message();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_lifecycle() {
        let mut state = SystemState::default();
        assert_eq!(state.status_message, None);
        state.set_status_message("saved");
        assert_eq!(state.status_message.as_deref(), Some("saved"));
        state.clear_status_message();
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_status_message_expires_after_ticks() {
        let mut state = SystemState::default();
        state.set_status_message("Error: disk full");
        for _ in 1..STATUS_TICKS {
            state.tick();
        }
        assert_eq!(state.status_message.as_deref(), Some("Error: disk full"));
        state.tick();
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_new_status_message_restarts_countdown() {
        let mut state = SystemState::default();
        state.set_status_message("first");
        state.tick();
        state.set_status_message("second");
        for _ in 1..STATUS_TICKS {
            state.tick();
        }
        assert_eq!(state.status_message.as_deref(), Some("second"));
    }

    #[test]
    fn test_quit() {
        let mut state = SystemState::default();
        state.quit();
        assert!(state.should_quit);
    }
}
