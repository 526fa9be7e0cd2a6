use log::debug;

use crate::DEFAULT_REST_TIME;

/// Countdown between sets.
///
/// The timer does not keep time itself. It is advanced by calling [`RestTimer::tick`] once per
/// second while [`RestTimer::is_running`] holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    time_left: u32,
    state: RestTimerState,
    visible: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RestTimerState {
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestTimerEvent {
    Completed,
}

impl RestTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from the given number of seconds, or from the default rest time.
    pub fn start(&mut self, duration: Option<u32>) {
        self.time_left = duration.unwrap_or(DEFAULT_REST_TIME);
        self.state = RestTimerState::Running;
        self.visible = true;
        debug!("rest timer started with {} s", self.time_left);
    }

    pub fn pause(&mut self) {
        if self.state == RestTimerState::Running {
            self.state = RestTimerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.time_left > 0 {
            self.state = RestTimerState::Running;
        }
    }

    pub fn reset(&mut self, duration: Option<u32>) {
        self.time_left = duration.unwrap_or(DEFAULT_REST_TIME);
        self.state = RestTimerState::Paused;
    }

    pub fn stop(&mut self) {
        self.time_left = 0;
        self.state = RestTimerState::Paused;
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns [`RestTimerEvent::Completed`] on the tick which reaches zero. Ticks while not
    /// running have no effect.
    pub fn tick(&mut self) -> Option<RestTimerEvent> {
        if self.state != RestTimerState::Running {
            return None;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.state = RestTimerState::Paused;
            debug!("rest timer completed");
            return Some(RestTimerEvent::Completed);
        }
        self.time_left -= 1;
        None
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn state(&self) -> RestTimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RestTimerState::Running
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.time_left > 0 || self.is_running()
    }
}

/// Format seconds as minutes and zero-padded seconds, e.g. "1:05".
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_countdown_completes_once() {
        let mut timer = RestTimer::new();
        timer.start(None);
        assert_eq!(timer.time_left(), 90);

        let events = (0..100).filter_map(|_| timer.tick()).collect::<Vec<_>>();

        assert_eq!(events, vec![RestTimerEvent::Completed]);
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.state(), RestTimerState::Paused);
        assert!(timer.is_visible());
        assert!(!timer.is_active());
    }

    #[test]
    fn test_completes_on_last_tick() {
        let mut timer = RestTimer::new();
        timer.start(Some(3));
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), Some(RestTimerEvent::Completed));
        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut timer = RestTimer::new();
        timer.start(Some(60));
        timer.tick();
        timer.pause();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.time_left(), 59);
        assert!(timer.is_active());
        timer.resume();
        timer.tick();
        assert_eq!(timer.time_left(), 58);
        assert!(timer.is_running());
    }

    #[test]
    fn test_resume_at_zero() {
        let mut timer = RestTimer::new();
        timer.start(Some(1));
        timer.tick();
        timer.resume();
        assert_eq!(timer.state(), RestTimerState::Paused);
    }

    #[test]
    fn test_reset() {
        let mut timer = RestTimer::new();
        timer.start(Some(30));
        timer.reset(Some(120));
        assert_eq!(timer.time_left(), 120);
        assert_eq!(timer.state(), RestTimerState::Paused);
        timer.reset(None);
        assert_eq!(timer.time_left(), 90);
    }

    #[test]
    fn test_stop() {
        let mut timer = RestTimer::new();
        timer.start(Some(30));
        timer.stop();
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.state(), RestTimerState::Paused);
        assert!(!timer.is_visible());
        assert!(!timer.is_active());
    }

    #[test]
    fn test_show_and_hide() {
        let mut timer = RestTimer::new();
        assert!(!timer.is_visible());
        timer.show();
        assert!(timer.is_visible());
        timer.hide();
        assert!(!timer.is_visible());
    }

    #[rstest]
    #[case(0, "0:00")]
    #[case(5, "0:05")]
    #[case(90, "1:30")]
    #[case(600, "10:00")]
    #[case(3661, "61:01")]
    fn test_format_time(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(format_time(seconds), expected);
    }
}
