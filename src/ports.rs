//! Interfaces to the hardware around the controller.
//!
//! Implementations own their failure handling: a clock that cannot be read
//! returns its last good value, a display that rejects a frame drops it.

use crate::clock::TimeOfDay;
use crate::display::DisplayFrame;
use crate::input::InputEvent;

/// Real-time clock.
pub trait ClockSource {
    fn read(&mut self) -> TimeOfDay;

    /// Only ever called after setup, with `second == 0`.
    fn write(&mut self, time: TimeOfDay);
}

/// Persistent summer-time flag.
pub trait FlagStore {
    fn read_summer_flag(&mut self) -> bool;
    fn write_summer_flag(&mut self, on: bool);
}

/// The LED matrix.
///
/// The controller always calls `begin_update`, `render` and `end_update` in
/// that order with a complete frame; implementations that can latch a frame
/// should show nothing new before `end_update`.
pub trait DisplaySink {
    fn begin_update(&mut self) {}

    fn render(&mut self, frame: &DisplayFrame);

    fn end_update(&mut self) {}
}

/// Polled, already classified button input.
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Monotonic milliseconds and blocking waits.
pub trait Timebase {
    fn now_ms(&mut self) -> u64;
    fn delay_ms(&mut self, ms: u32);
}
