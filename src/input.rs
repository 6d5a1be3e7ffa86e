//! Button events and the classifier that produces them from raw levels.

/// Classified, debounced button gesture. At most one per poll.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    SinglePress,
    DoublePress,
    LongPress,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickTiming {
    /// A level must hold this long before it counts.
    pub debounce_ms: u64,
    /// Longest release between the two presses of a double press.
    pub double_click_gap_ms: u64,
    /// Hold time that turns a press into a long press.
    pub long_press_ms: u64,
}

impl Default for ClickTiming {
    fn default() -> Self {
        Self {
            debounce_ms: 30,
            double_click_gap_ms: 350,
            long_press_ms: 900,
        }
    }
}

impl ClickTiming {
    pub const fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_double_click_gap_ms(mut self, double_click_gap_ms: u64) -> Self {
        self.double_click_gap_ms = double_click_gap_ms;
        self
    }

    pub const fn with_long_press_ms(mut self, long_press_ms: u64) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Released,
    Pressed { since_ms: u64, second: bool },
    AwaitSecond { released_ms: u64 },
    /// Long press already reported; wait for release.
    Held,
}

/// Turns sampled button levels into [`InputEvent`]s.
///
/// Feed it the raw level on every poll; it debounces, then tracks the press
/// and release edges against [`ClickTiming`].
#[derive(Debug)]
pub struct ClickClassifier {
    timing: ClickTiming,
    raw: bool,
    raw_since_ms: u64,
    stable: bool,
    phase: Phase,
}

impl ClickClassifier {
    pub const fn new(timing: ClickTiming) -> Self {
        Self {
            timing,
            raw: false,
            raw_since_ms: 0,
            stable: false,
            phase: Phase::Released,
        }
    }

    pub fn update(&mut self, pressed: bool, now_ms: u64) -> Option<InputEvent> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since_ms = now_ms;
        }

        let settled = now_ms.saturating_sub(self.raw_since_ms) >= self.timing.debounce_ms;
        if settled && self.raw != self.stable {
            self.stable = self.raw;
            // Date the edge from when the level first changed, not from when
            // the debounce window closed.
            let edge_ms = self.raw_since_ms;
            let event = if self.stable {
                self.on_press(edge_ms)
            } else {
                self.on_release(edge_ms)
            };
            if event.is_some() {
                return event;
            }
        }

        self.on_idle(now_ms)
    }

    fn on_press(&mut self, at_ms: u64) -> Option<InputEvent> {
        self.phase = match self.phase {
            Phase::Released => Phase::Pressed { since_ms: at_ms, second: false },
            Phase::AwaitSecond { .. } => Phase::Pressed { since_ms: at_ms, second: true },
            other => other,
        };
        None
    }

    fn on_release(&mut self, at_ms: u64) -> Option<InputEvent> {
        let (event, phase) = match self.phase {
            Phase::Pressed { since_ms, .. }
                if at_ms.saturating_sub(since_ms) >= self.timing.long_press_ms =>
            {
                (Some(InputEvent::LongPress), Phase::Released)
            }
            Phase::Pressed { second: true, .. } => (Some(InputEvent::DoublePress), Phase::Released),
            Phase::Pressed { second: false, .. } => (None, Phase::AwaitSecond { released_ms: at_ms }),
            Phase::Held => (None, Phase::Released),
            other => (None, other),
        };
        self.phase = phase;
        if let Some(event) = event {
            trace!("button: {}", event);
        }
        event
    }

    fn on_idle(&mut self, now_ms: u64) -> Option<InputEvent> {
        match self.phase {
            Phase::Pressed { since_ms, .. }
                if now_ms.saturating_sub(since_ms) >= self.timing.long_press_ms =>
            {
                self.phase = Phase::Held;
                trace!("button: long press");
                Some(InputEvent::LongPress)
            }
            Phase::AwaitSecond { released_ms }
                if now_ms.saturating_sub(released_ms) > self.timing.double_click_gap_ms =>
            {
                self.phase = Phase::Released;
                trace!("button: single press");
                Some(InputEvent::SinglePress)
            }
            _ => None,
        }
    }
}
