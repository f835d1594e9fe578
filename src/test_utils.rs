use embedded_hal::i2c::{Error, ErrorKind, ErrorType, Operation, SevenBitAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeI2cError {
    /// Injected failure
    Io,
    /// The driver wrote something other than `[register, value]`
    Payload,
    /// The recording buffer is full
    Full,
    /// The driver attempted a read
    Read,
}

impl Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Records every two-byte write as `(address, [register, value])`. The write
/// with index `fail_at` (counting attempts from 0) fails with
/// `FakeI2cError::Io` and is not recorded.
pub struct FakeI2cBus<const N: usize> {
    pub writes: heapless::Vec<(u8, [u8; 2]), N>,
    fail_at: Option<usize>,
    attempts: usize,
}

impl<const N: usize> ErrorType for FakeI2cBus<N> {
    type Error = FakeI2cError;
}

impl<const N: usize> FakeI2cBus<N> {
    pub fn new() -> Self {
        Self {
            writes: heapless::Vec::new(),
            fail_at: None,
            attempts: 0,
        }
    }

    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Self::new()
        }
    }

    /// Number of writes attempted, including the failed one
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    fn record(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), FakeI2cError> {
        for operation in operations {
            match operation {
                Operation::Write(data) => {
                    let attempt = self.attempts;
                    self.attempts += 1;

                    if self.fail_at == Some(attempt) {
                        return Err(FakeI2cError::Io);
                    }

                    let payload: [u8; 2] = (*data)
                        .try_into()
                        .map_err(|_| FakeI2cError::Payload)?;
                    self.writes
                        .push((address, payload))
                        .map_err(|_| FakeI2cError::Full)?;
                }
                Operation::Read(_) => return Err(FakeI2cError::Read),
            }
        }
        Ok(())
    }
}

impl<const N: usize> embedded_hal::i2c::I2c for FakeI2cBus<N> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}

impl<const N: usize> embedded_hal_async::i2c::I2c for FakeI2cBus<N> {
    async fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}
