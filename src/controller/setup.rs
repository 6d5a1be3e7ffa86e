use crate::clock::TimeOfDay;
use crate::display::{render_digits, DisplayFrame};
use crate::input::InputEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupState {
    DisplayHour,
    EditHour,
    DisplayMinute,
    EditMinute,
    Done,
}

/// Time-set dialog: hour first, then minute, one click per step.
///
/// A double press moves on to the next field, and a quiet period of
/// `timeout_ms` ends the dialog wherever it is, keeping what was entered.
#[derive(Debug)]
pub struct SetupMachine {
    state: SetupState,
    time: TimeOfDay,
    last_activity_ms: u64,
    timeout_ms: u64,
}

impl SetupMachine {
    pub const fn new(hour: u8, minute: u8, now_ms: u64, timeout_ms: u64) -> Self {
        Self {
            state: SetupState::DisplayHour,
            time: TimeOfDay::new(hour, minute, 0),
            last_activity_ms: now_ms,
            timeout_ms,
        }
    }

    pub const fn state(&self) -> SetupState {
        self.state
    }

    pub const fn hour(&self) -> u8 {
        self.time.hour
    }

    pub const fn minute(&self) -> u8 {
        self.time.minute
    }

    pub const fn is_done(&self) -> bool {
        matches!(self.state, SetupState::Done)
    }

    /// Only the edit states consume button events.
    pub const fn wants_input(&self) -> bool {
        matches!(self.state, SetupState::EditHour | SetupState::EditMinute)
    }

    /// Advances one poll. Returns the frame to show if the display changed.
    pub fn step(&mut self, event: Option<InputEvent>, now_ms: u64) -> Option<DisplayFrame> {
        if event.is_some() {
            self.last_activity_ms = now_ms;
        } else if !self.is_done()
            && now_ms.saturating_sub(self.last_activity_ms) >= self.timeout_ms
        {
            debug!("setup: idle timeout in {}", self.state);
            self.state = SetupState::Done;
            return None;
        }

        match (self.state, event) {
            (SetupState::DisplayHour, _) => {
                self.state = SetupState::EditHour;
                Some(render_digits(self.time.hour))
            }
            (SetupState::EditHour, Some(InputEvent::SinglePress)) => {
                self.time.increment_hour();
                Some(render_digits(self.time.hour))
            }
            (SetupState::EditHour, Some(InputEvent::DoublePress)) => {
                self.state = SetupState::DisplayMinute;
                None
            }
            (SetupState::DisplayMinute, _) => {
                self.state = SetupState::EditMinute;
                Some(render_digits(self.time.minute))
            }
            (SetupState::EditMinute, Some(InputEvent::SinglePress)) => {
                self.time.increment_minute();
                Some(render_digits(self.time.minute))
            }
            (SetupState::EditMinute, Some(InputEvent::DoublePress)) => {
                self.state = SetupState::Done;
                None
            }
            _ => None,
        }
    }
}
