use super::{InputEvent, InputProvider};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

impl TimedEvent {
    pub const fn new(at_ms: u64, event: InputEvent) -> Self {
        Self { at_ms, event }
    }
}

/// Replays a fixed, time-ordered event list against a host-driven clock.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedInput<'a> {
    events: &'a [TimedEvent],
    cursor: usize,
    now_ms: u64,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [TimedEvent]) -> Self {
        Self {
            events,
            cursor: 0,
            now_ms: 0,
        }
    }

    /// Release every event scheduled at or before `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn next_at_ms(&self) -> Option<u64> {
        self.events.get(self.cursor).map(|timed| timed.at_ms)
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(timed) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        if timed.at_ms > self.now_ms {
            return Ok(None);
        }
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(timed.event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn events_are_held_until_their_time() {
        let events = [
            TimedEvent::new(0, InputEvent::Key(Key::ArrowRight)),
            TimedEvent::new(500, InputEvent::Key(Key::ArrowLeft)),
        ];
        let mut input = ScriptedInput::new(&events);

        assert_eq!(
            input.poll_event().unwrap(),
            Some(InputEvent::Key(Key::ArrowRight))
        );
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.next_at_ms(), Some(500));

        input.advance_to(500);
        assert_eq!(
            input.poll_event().unwrap(),
            Some(InputEvent::Key(Key::ArrowLeft))
        );
        assert!(input.is_exhausted());
    }
}
