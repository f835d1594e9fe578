//! Uniform LED control contract used by lighting code that does not care
//! which LED chip sits behind it.

use crate::error::Error;
use crate::is31fl3216a::{Async, Blocking, IS31FL3216A};

/// Blocking LED controller
pub trait LedController {
    type Error;

    /// Number of addressable LEDs
    fn led_count(&self) -> u8;

    fn on(&mut self, led: u8) -> Result<(), Self::Error>;

    fn off(&mut self, led: u8) -> Result<(), Self::Error>;

    /// Set the brightness of `led` as a percentage, 0 to 100
    fn set_brightness(&mut self, led: u8, percent: u8)
        -> Result<(), Self::Error>;

    /// Blink `led`, delays are in milliseconds
    fn blink(
        &mut self,
        led: u8,
        delay_on: u32,
        delay_off: u32,
    ) -> Result<(), Self::Error>;
}

/// Async LED controller
#[allow(async_fn_in_trait)]
pub trait AsyncLedController {
    type Error;

    fn led_count(&self) -> u8;

    async fn on(&mut self, led: u8) -> Result<(), Self::Error>;

    async fn off(&mut self, led: u8) -> Result<(), Self::Error>;

    async fn set_brightness(
        &mut self,
        led: u8,
        percent: u8,
    ) -> Result<(), Self::Error>;

    async fn blink(
        &mut self,
        led: u8,
        delay_on: u32,
        delay_off: u32,
    ) -> Result<(), Self::Error>;
}

impl<BUS: embedded_hal::i2c::I2c> LedController for IS31FL3216A<BUS, Blocking> {
    type Error = Error<BUS::Error>;

    fn led_count(&self) -> u8 {
        Self::led_count(self)
    }

    fn on(&mut self, led: u8) -> Result<(), Self::Error> {
        self.turn_on(led)
    }

    fn off(&mut self, led: u8) -> Result<(), Self::Error> {
        self.turn_off(led)
    }

    fn set_brightness(
        &mut self,
        led: u8,
        percent: u8,
    ) -> Result<(), Self::Error> {
        Self::set_brightness(self, led, percent)
    }

    fn blink(
        &mut self,
        led: u8,
        delay_on: u32,
        delay_off: u32,
    ) -> Result<(), Self::Error> {
        Self::blink(self, led, delay_on, delay_off)
    }
}

impl<BUS: embedded_hal_async::i2c::I2c> AsyncLedController
    for IS31FL3216A<BUS, Async>
{
    type Error = Error<BUS::Error>;

    fn led_count(&self) -> u8 {
        Self::led_count(self)
    }

    async fn on(&mut self, led: u8) -> Result<(), Self::Error> {
        self.turn_on(led).await
    }

    async fn off(&mut self, led: u8) -> Result<(), Self::Error> {
        self.turn_off(led).await
    }

    async fn set_brightness(
        &mut self,
        led: u8,
        percent: u8,
    ) -> Result<(), Self::Error> {
        Self::set_brightness(self, led, percent).await
    }

    async fn blink(
        &mut self,
        led: u8,
        delay_on: u32,
        delay_off: u32,
    ) -> Result<(), Self::Error> {
        Self::blink(self, led, delay_on, delay_off)
    }
}
