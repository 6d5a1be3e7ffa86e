//! Run loop and UI modes.
//!
//! The controller is the only thread of control. Each [`Controller::poll`]
//! runs one step of the top-level machine; the digit, setup and summer-time
//! modes run to completion inside that step before returning.

mod setup;

pub use setup::{SetupMachine, SetupState};

use crate::clock::{previous_hour, TimeOfDay};
use crate::display::{render_digits, render_signed, DisplayFrame};
use crate::input::InputEvent;
use crate::ports::{ClockSource, DisplaySink, FlagStore, InputSource, Timebase};
use crate::words::phrase_for;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Word display is redrawn at least this often.
    pub refresh_ms: u64,
    /// Setup ends after this long without a button event.
    pub setup_timeout_ms: u64,
    /// How long each digit pair stays up in the time readout.
    pub digit_dwell_ms: u32,
    /// How long the summer-time offset stays up after toggling.
    pub summer_dwell_ms: u32,
    /// Sleep between polls.
    pub poll_interval_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 5_000,
            setup_timeout_ms: 10_000,
            digit_dwell_ms: 1_000,
            summer_dwell_ms: 1_500,
            poll_interval_ms: 20,
        }
    }
}

impl ControllerConfig {
    pub const fn with_refresh_ms(mut self, refresh_ms: u64) -> Self {
        self.refresh_ms = refresh_ms;
        self
    }

    pub const fn with_setup_timeout_ms(mut self, setup_timeout_ms: u64) -> Self {
        self.setup_timeout_ms = setup_timeout_ms;
        self
    }

    pub const fn with_digit_dwell_ms(mut self, digit_dwell_ms: u32) -> Self {
        self.digit_dwell_ms = digit_dwell_ms;
        self
    }

    pub const fn with_summer_dwell_ms(mut self, summer_dwell_ms: u32) -> Self {
        self.summer_dwell_ms = summer_dwell_ms;
        self
    }

    pub const fn with_poll_interval_ms(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }
}

/// Top-level UI mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Update,
    Idle,
    Setup,
    ShowTime,
    ShowSummer,
}

pub struct Controller<C, F, D, I, T> {
    clock: C,
    flags: F,
    display: D,
    input: I,
    timebase: T,
    config: ControllerConfig,
    mode: Mode,
    last_update_ms: u64,
}

impl<C, F, D, I, T> Controller<C, F, D, I, T>
where
    C: ClockSource,
    F: FlagStore,
    D: DisplaySink,
    I: InputSource,
    T: Timebase,
{
    pub fn new(clock: C, flags: F, display: D, input: I, timebase: T, config: ControllerConfig) -> Self {
        Self {
            clock,
            flags,
            display,
            input,
            timebase,
            config,
            mode: Mode::Update,
            last_update_ms: 0,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Polls forever at the configured interval.
    pub fn run(&mut self) -> ! {
        info!("word clock running, refresh every {} ms", self.config.refresh_ms);
        loop {
            self.poll();
            self.timebase.delay_ms(self.config.poll_interval_ms);
        }
    }

    /// Runs one step of the top-level machine and returns the next mode.
    pub fn poll(&mut self) -> Mode {
        let next = match self.mode {
            Mode::Update => {
                self.show_words();
                Mode::Idle
            }
            Mode::Idle => self.idle(),
            Mode::ShowTime => {
                self.show_time();
                Mode::Update
            }
            Mode::Setup => {
                self.setup();
                Mode::Update
            }
            Mode::ShowSummer => {
                self.toggle_summer();
                Mode::Update
            }
        };

        if next != self.mode {
            trace!("mode {} -> {}", self.mode, next);
        }
        self.mode = next;
        next
    }

    fn idle(&mut self) -> Mode {
        // A button event wins over a refresh that falls due on the same poll.
        match self.input.poll() {
            Some(InputEvent::SinglePress) => Mode::ShowTime,
            Some(InputEvent::DoublePress) => Mode::Setup,
            Some(InputEvent::LongPress) => Mode::ShowSummer,
            None => {
                let now_ms = self.timebase.now_ms();
                if now_ms.saturating_sub(self.last_update_ms) >= self.config.refresh_ms {
                    Mode::Update
                } else {
                    Mode::Idle
                }
            }
        }
    }

    fn show_words(&mut self) {
        let time = self.clock.read();
        let hour = time.displayed_hour(self.flags.read_summer_flag());
        let phrase = phrase_for(hour, time.minute);

        let mut text = [0u8; 32];
        if let Ok(words) = phrase.describe(&mut text) {
            debug!("{}:{} reads {}", hour, time.minute, words);
        }

        self.present(&phrase.frame());
        self.last_update_ms = self.timebase.now_ms();
    }

    fn show_time(&mut self) {
        let time = self.clock.read();
        let hour = time.displayed_hour(self.flags.read_summer_flag());

        self.present(&render_digits(hour));
        self.timebase.delay_ms(self.config.digit_dwell_ms);
        self.present(&render_digits(time.minute));
        self.timebase.delay_ms(self.config.digit_dwell_ms);
    }

    fn setup(&mut self) {
        let summer = self.flags.read_summer_flag();
        let time = self.clock.read();
        let mut machine = SetupMachine::new(
            time.displayed_hour(summer),
            time.minute,
            self.timebase.now_ms(),
            self.config.setup_timeout_ms,
        );

        while !machine.is_done() {
            let event = if machine.wants_input() {
                self.input.poll()
            } else {
                None
            };
            let now_ms = self.timebase.now_ms();
            if let Some(frame) = machine.step(event, now_ms) {
                self.present(&frame);
            }
            if machine.wants_input() {
                self.timebase.delay_ms(self.config.poll_interval_ms);
            }
        }

        // The dialog edits the hour as shown; the clock keeps real time.
        let hour = if summer {
            previous_hour(machine.hour())
        } else {
            machine.hour()
        };
        let time = TimeOfDay::new(hour, machine.minute(), 0);
        info!("clock set to {}:{}", time.hour, time.minute);
        self.clock.write(time);
    }

    fn toggle_summer(&mut self) {
        let on = !self.flags.read_summer_flag();
        self.flags.write_summer_flag(on);
        info!("summer time {}", on);

        self.present(&render_signed(if on { 1 } else { -1 }));
        self.timebase.delay_ms(self.config.summer_dwell_ms);
    }

    fn present(&mut self, frame: &DisplayFrame) {
        self.display.begin_update();
        self.display.render(frame);
        self.display.end_update();
    }
}
