use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEventKind};

use super::event::TuiEvent;

/// Produces ticks at a fixed interval and a render whenever something changed.
///
/// Key presses and resizes mark the screen dirty; ticks only do so through
/// [`EventLoop::mark_dirty`].
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: Instant::now(),
            dirty: true,
        }
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Blocks until the next tick is due, a render is pending or a key is pressed.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.tick_due(now) {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }
            if !event::poll(self.timeout(now))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.dirty = true;
                    return Ok(TuiEvent::Key(key));
                }
                Event::Resize(..) => self.dirty = true,
                _ => {}
            }
        }
    }

    fn tick_due(&self, now: Instant) -> bool {
        now.duration_since(self.last_tick) >= self.tick_interval
    }

    fn timeout(&self, now: Instant) -> Duration {
        (self.last_tick + self.tick_interval).saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_counts_down_to_next_tick() {
        let mut events = EventLoop::new(Duration::from_millis(100));
        let start = Instant::now();
        events.last_tick = start;

        assert!(!events.tick_due(start));
        assert_eq!(events.timeout(start), Duration::from_millis(100));
        assert_eq!(
            events.timeout(start + Duration::from_millis(30)),
            Duration::from_millis(70)
        );
        assert!(events.tick_due(start + Duration::from_millis(100)));
        assert_eq!(events.timeout(start + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn test_first_event_is_render() {
        let mut events = EventLoop::new(Duration::from_secs(60));
        let event = events.next().unwrap();
        assert!(event.is_render());
    }
}
