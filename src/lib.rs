//! # IS31FL3216A driver
//! A blocking and async `embedded-hal` driver for the Lumissil IS31FL3216A,
//! a 16-channel LED PWM controller on I2C.
//!
//! ```ignore
//! let mut leds = IS31FL3216A::new_blocking(i2c, 0x74);
//! leds.initialize()?;
//! leds.set_brightness(0, 50)?;
//! ```

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod is31fl3216a;
pub mod led;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use is31fl3216a::{Async, Blocking, Mode, IS31FL3216A};
pub use led::{AsyncLedController, LedController};
pub use state::State;
