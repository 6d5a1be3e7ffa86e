//! Word clock core.
//!
//! Turns a time of day into the set of LEDs to light behind an 8x8 word
//! overlay, and runs the small button-driven UI around it (time setting,
//! digit display and the summer-time toggle).
//!
//! The library is `no_std` and talks to hardware only through the traits in
//! [`ports`]. The RP2040 firmware in `src/main.rs` (feature `hardware`)
//! provides those implementations.
//!
//! # Features
//!
//! - `defmt` - log through `defmt` and derive `defmt::Format` on public types
//! - `hardware` - build the RP2040 + MAX7219 firmware binary (implies `defmt`)

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod clock;
pub mod controller;
pub mod display;
pub mod font;
pub mod input;
pub mod ports;
pub mod words;

pub use clock::TimeOfDay;
pub use controller::{Controller, ControllerConfig, Mode};
pub use display::{render_digits, render_signed, DisplayFrame};
pub use input::{ClickClassifier, ClickTiming, InputEvent};
pub use words::{phrase_for, render_words, Phrase};
