use crate::config::*;
use crate::error::Error;
use crate::state::State;

use embedded_hal::i2c::{Error as _, ErrorType};

pub trait Mode {}

#[derive(Debug)]
pub struct Async;
#[derive(Debug)]
pub struct Blocking;

impl Mode for Async {}
impl Mode for Blocking {}

pub struct IS31FL3216A<BUS, M: Mode> {
    bus: BUS,
    address: u8,
    state: State,
    _phantom: core::marker::PhantomData<M>,
}

// General implementation
impl<BUS, M: Mode> IS31FL3216A<BUS, M> {
    /// Create a new IS31FL3216A driver
    /// # Arguments
    /// * `bus` - The I2C bus to use
    /// * `address` - The I2C address of the device
    ///
    /// # Returns
    /// A new, uninitialized IS31FL3216A driver
    pub fn new(bus: BUS, address: u8) -> Self {
        Self {
            bus,
            address,
            state: State::default(),
            _phantom: core::marker::PhantomData,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    pub fn led_count(&self) -> u8 {
        LED_COUNT
    }

    pub fn into_inner(self) -> BUS {
        self.bus
    }

    pub fn inner(&self) -> &BUS {
        &self.bus
    }

    pub fn inner_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }
}

impl<BUS: ErrorType, M: Mode> IS31FL3216A<BUS, M> {
    /// Blinking is not supported, the chip has no autonomous blink engine.
    ///
    /// # Returns
    /// * Err(Error::Unsupported) always, nothing is written to the bus
    pub fn blink(
        &mut self,
        _led: u8,
        _delay_on: u32,
        _delay_off: u32,
    ) -> Result<(), Error<BUS::Error>> {
        Err(Error::Unsupported)
    }

    /// Validates a brightness request and resolves it to the PWM register
    /// write that carries it.
    fn pwm_write(
        &self,
        led: u8,
        percent: u8,
    ) -> Result<RegisterWrite, Error<BUS::Error>> {
        let register = pwm_register(led).ok_or(Error::Capacity(led))?;

        if percent > MAX_BRIGHTNESS_PERCENT {
            return Err(Error::ArgumentRange(percent));
        }

        if self.state != State::Ready {
            warn!("LED {} written before initialization", led);
        }

        Ok((register, scale_brightness(percent)))
    }
}

impl<BUS: embedded_hal::i2c::I2c> IS31FL3216A<BUS, Blocking> {
    pub fn new_blocking(bus: BUS, address: u8) -> Self {
        Self::new(bus, address)
    }

    /// Writes a single register as one `[register, value]` transaction.
    /// Failures are reported, never retried.
    fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Error<BUS::Error>> {
        self.bus
            .write(self.address, &[register, value])
            .map_err(|source| {
                error!(
                    "Could not write register {:#x}: {:?}",
                    register,
                    source.kind()
                );
                Error::Transport { register, source }
            })
    }

    /// Initialize the device: enable every channel, zero and latch every PWM
    /// register, then leave shutdown.
    ///
    /// # Returns
    /// * Ok(()) if all writes succeeded, the driver is then `Ready`
    /// * Err(Error::Transport) for the first failed write, later writes are
    ///   skipped and the driver stays `Uninitialized`
    pub fn initialize(&mut self) -> Result<(), Error<BUS::Error>> {
        info!("Initializing @{:#x}...", self.address);
        self.state = State::Uninitialized;

        for (register, value) in INIT_SEQUENCE {
            self.write_register(register, value)?;
        }

        self.state = State::Ready;
        Ok(())
    }

    /// Set the brightness of one LED and latch it
    ///
    /// # Arguments
    /// * `led` - The LED index, 0 to 15
    /// * `percent` - The brightness, 0 to 100
    ///
    /// # Returns
    /// * Ok(()) if both the PWM and the latch writes succeeded
    /// * Err(Error::Capacity) / Err(Error::ArgumentRange) on invalid input,
    ///   nothing is written
    /// * Err(Error::Transport) for the first failed write. If only the latch
    ///   fails, the chip keeps showing the previous output until the next
    ///   successful latch.
    pub fn set_brightness(
        &mut self,
        led: u8,
        percent: u8,
    ) -> Result<(), Error<BUS::Error>> {
        let (register, value) = self.pwm_write(led, percent)?;

        self.write_register(register, value)?;
        self.write_register(UPDATE_REGISTER, UPDATE_LATCH)
    }

    pub fn turn_on(&mut self, led: u8) -> Result<(), Error<BUS::Error>> {
        self.set_brightness(led, MAX_BRIGHTNESS_PERCENT)
    }

    pub fn turn_off(&mut self, led: u8) -> Result<(), Error<BUS::Error>> {
        self.set_brightness(led, 0)
    }
}

impl<BUS: embedded_hal_async::i2c::I2c> IS31FL3216A<BUS, Async> {
    pub fn new_async(bus: BUS, address: u8) -> Self {
        Self::new(bus, address)
    }

    async fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Error<BUS::Error>> {
        self.bus
            .write(self.address, &[register, value])
            .await
            .map_err(|source| {
                error!(
                    "Could not write register {:#x}: {:?}",
                    register,
                    source.kind()
                );
                Error::Transport { register, source }
            })
    }

    /// Initialize the device
    ///
    /// # Returns
    /// * Ok(()) if all writes succeeded, the driver is then `Ready`
    /// * Err(Error::Transport) for the first failed write
    pub async fn initialize(&mut self) -> Result<(), Error<BUS::Error>> {
        info!("Initializing @{:#x}...", self.address);
        self.state = State::Uninitialized;

        for (register, value) in INIT_SEQUENCE {
            self.write_register(register, value).await?;
        }

        self.state = State::Ready;
        Ok(())
    }

    /// Set the brightness of one LED and latch it
    ///
    /// # Arguments
    /// * `led` - The LED index, 0 to 15
    /// * `percent` - The brightness, 0 to 100
    pub async fn set_brightness(
        &mut self,
        led: u8,
        percent: u8,
    ) -> Result<(), Error<BUS::Error>> {
        let (register, value) = self.pwm_write(led, percent)?;

        self.write_register(register, value).await?;
        self.write_register(UPDATE_REGISTER, UPDATE_LATCH).await
    }

    pub async fn turn_on(&mut self, led: u8) -> Result<(), Error<BUS::Error>> {
        self.set_brightness(led, MAX_BRIGHTNESS_PERCENT).await
    }

    pub async fn turn_off(&mut self, led: u8) -> Result<(), Error<BUS::Error>> {
        self.set_brightness(led, 0).await
    }
}
