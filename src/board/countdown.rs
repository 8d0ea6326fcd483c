#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ClockState {
    #[default]
    Idle,
    Running,
    Paused,
    Expired,
}

/// Session countdown. Expiry fires exactly once per started run; after that
/// the clock is inert until restarted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    state: ClockState,
    remaining: f32,
}

impl Countdown {
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
        self.state = ClockState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Idle;
    }

    /// Advance by `dt` seconds. Returns true on the tick that crosses zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining <= 0.0 {
            self.state = ClockState::Expired;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state == ClockState::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn fresh_clock_does_not_tick() {
        let mut clock = Countdown::default();
        assert!(!clock.tick(DT));
        assert_eq!(clock.remaining(), 0.0);
        assert!(!clock.is_expired());
    }

    #[test]
    fn counts_down_while_running() {
        let mut clock = Countdown::default();
        clock.start(1.0);
        clock.tick(DT);
        assert!(clock.remaining() < 1.0);
        assert!(clock.is_running());
    }

    #[test]
    fn expiry_fires_exactly_once() {
        let mut clock = Countdown::default();
        clock.start(3.0 * DT);

        let mut fired = 0;
        for _ in 0..10 {
            if clock.tick(DT) {
                fired += 1;
            }
        }

        assert_eq!(fired, 1);
        assert!(clock.is_expired());
        assert_eq!(clock.remaining(), 0.0);
    }

    #[test]
    fn remaining_never_goes_negative() {
        let mut clock = Countdown::default();
        clock.start(0.01);
        for _ in 0..5 {
            clock.tick(DT);
            assert!(clock.remaining() >= 0.0);
        }
    }

    #[test]
    fn pause_freezes_the_remaining_time() {
        let mut clock = Countdown::default();
        clock.start(10.0);
        clock.tick(DT);
        let frozen = clock.remaining();

        clock.pause();
        for _ in 0..100 {
            assert!(!clock.tick(DT));
        }
        assert_eq!(clock.remaining(), frozen);
    }

    #[test]
    fn resume_continues_from_where_it_paused() {
        let mut clock = Countdown::default();
        clock.start(10.0);
        clock.pause();
        clock.resume();
        assert!(clock.is_running());
        clock.tick(DT);
        assert!(clock.remaining() < 10.0);
    }

    #[test]
    fn resume_does_not_revive_an_expired_clock() {
        let mut clock = Countdown::default();
        clock.start(DT);
        clock.tick(DT);
        assert!(clock.is_expired());

        clock.resume();
        assert!(!clock.is_running());
        assert!(!clock.tick(DT));
    }

    #[test]
    fn restart_after_expiry_gives_a_fresh_run() {
        let mut clock = Countdown::default();
        clock.start(DT);
        clock.tick(DT);
        assert!(clock.is_expired());

        clock.stop();
        clock.start(5.0);
        assert!(clock.is_running());
        assert_eq!(clock.remaining(), 5.0);
        assert!(!clock.tick(DT));
    }

    #[test]
    fn pause_before_first_tick_holds_the_full_limit() {
        let mut clock = Countdown::default();
        clock.start(20.0);
        clock.pause();
        clock.tick(DT);
        assert_eq!(clock.remaining(), 20.0);
    }
}
