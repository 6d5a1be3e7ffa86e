//! Pico implementations of the word clock ports.

use embedded_hal::digital::v2::InputPin;
use max7219::MAX7219;
use rp_pico::hal::gpio::bank0::{Gpio15, Gpio16, Gpio17, Gpio18, Gpio19};
use rp_pico::hal::gpio::{FunctionSio, FunctionSpi, Pin, PullDown, PullUp, SioInput, SioOutput};
use rp_pico::hal::timer::Timer;
use word_clock::ports::{ClockSource, DisplaySink, FlagStore, InputSource, Timebase};
use word_clock::{ClickClassifier, Controller, DisplayFrame, InputEvent, TimeOfDay};

type Spi0 = rp_pico::hal::spi::Spi<
    rp_pico::hal::spi::Enabled,
    rp_pico::hal::pac::SPI0,
    (
        Pin<Gpio19, FunctionSpi, PullDown>,
        Pin<Gpio16, FunctionSpi, PullDown>,
        Pin<Gpio18, FunctionSpi, PullDown>,
    ),
>;
pub type CsPin = Pin<Gpio17, FunctionSio<SioOutput>, PullDown>;
pub type Matrix = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;
pub type ButtonPin = Pin<Gpio15, FunctionSio<SioInput>, PullUp>;

pub type WordClock = Controller<SoftRtc, RamFlagStore, MatrixDisplay, ButtonInput, PicoTimebase>;

fn micros(timer: &Timer) -> u64 {
    timer.get_counter().ticks()
}

/// Time of day kept by counting microseconds from the last time it was set.
pub struct SoftRtc {
    timer: Timer,
    base: TimeOfDay,
    base_us: u64,
}

impl SoftRtc {
    pub fn new(timer: Timer, start: TimeOfDay) -> Self {
        Self {
            timer,
            base: start,
            base_us: micros(&timer),
        }
    }
}

impl ClockSource for SoftRtc {
    fn read(&mut self) -> TimeOfDay {
        let elapsed_s = micros(&self.timer).saturating_sub(self.base_us) / 1_000_000;
        self.base.advanced_by(elapsed_s)
    }

    fn write(&mut self, time: TimeOfDay) {
        self.base = time;
        self.base_us = micros(&self.timer);
    }
}

/// Summer-time flag held in RAM; resets to off on power loss.
#[derive(Default)]
pub struct RamFlagStore {
    summer: bool,
}

impl FlagStore for RamFlagStore {
    fn read_summer_flag(&mut self) -> bool {
        self.summer
    }

    fn write_summer_flag(&mut self, on: bool) {
        self.summer = on;
    }
}

/// Single MAX7219 driving the 8x8 matrix.
///
/// `render` only stages the frame; all eight digit registers are written
/// back to back in `end_update`.
pub struct MatrixDisplay {
    matrix: Matrix,
    staged: Option<DisplayFrame>,
}

impl MatrixDisplay {
    pub const fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            staged: None,
        }
    }
}

impl DisplaySink for MatrixDisplay {
    fn begin_update(&mut self) {
        self.staged = None;
    }

    fn render(&mut self, frame: &DisplayFrame) {
        self.staged = Some(*frame);
    }

    fn end_update(&mut self) {
        if let Some(frame) = self.staged.take() {
            if let Err(e) = self.matrix.write_raw(0, frame.rows()) {
                defmt::warn!("matrix write failed: {}", defmt::Debug2Format(&e));
            }
        }
    }
}

/// Push button on GPIO15, active low, sampled on every poll.
pub struct ButtonInput {
    pin: ButtonPin,
    classifier: ClickClassifier,
    timer: Timer,
}

impl ButtonInput {
    pub const fn new(pin: ButtonPin, classifier: ClickClassifier, timer: Timer) -> Self {
        Self {
            pin,
            classifier,
            timer,
        }
    }
}

impl InputSource for ButtonInput {
    fn poll(&mut self) -> Option<InputEvent> {
        let pressed = self.pin.is_low().unwrap_or(false);
        self.classifier.update(pressed, micros(&self.timer) / 1_000)
    }
}

pub struct PicoTimebase {
    timer: Timer,
}

impl PicoTimebase {
    pub const fn new(timer: Timer) -> Self {
        Self { timer }
    }
}

impl Timebase for PicoTimebase {
    fn now_ms(&mut self) -> u64 {
        micros(&self.timer) / 1_000
    }

    fn delay_ms(&mut self, ms: u32) {
        let until = micros(&self.timer) + u64::from(ms) * 1_000;
        while micros(&self.timer) < until {
            cortex_m::asm::nop();
        }
    }
}
