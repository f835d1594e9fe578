use core::fmt;

use embedded_hal::i2c::ErrorKind;

/// Errors returned by the IS31FL3216A driver, `E` is the bus error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The LED index does not name one of the 16 channels
    Capacity(u8),
    /// The brightness percentage is above 100
    ArgumentRange(u8),
    /// The chip has no support for the requested operation
    Unsupported,
    /// The bus rejected a register write
    Transport { register: u8, source: E },
}

impl<E> Error<E> {
    /// Register targeted by the failed write, if the bus failed.
    pub fn register(&self) -> Option<u8> {
        match self {
            Error::Transport { register, .. } => Some(*register),
            _ => None,
        }
    }
}

impl<E: embedded_hal::i2c::Error> embedded_hal::i2c::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { source, .. } => source.kind(),
            _ => ErrorKind::Other,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Capacity(led) => write!(f, "no LED channel {led}"),
            Error::ArgumentRange(percent) => {
                write!(f, "brightness {percent}% is above 100%")
            }
            Error::Unsupported => f.write_str("operation not supported"),
            Error::Transport { register, source } => {
                write!(f, "could not write register {register:#04x}: {source:?}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{Error as _, NoAcknowledgeSource};

    #[test]
    fn kind_test() {
        let transport: Error<ErrorKind> = Error::Transport {
            register: 0x1f,
            source: ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
        };

        assert_eq!(
            transport.kind(),
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        );
        assert_eq!(transport.register(), Some(0x1f));

        assert_eq!(Error::<ErrorKind>::Capacity(16).kind(), ErrorKind::Other);
        assert_eq!(Error::<ErrorKind>::ArgumentRange(101).register(), None);
        assert_eq!(Error::<ErrorKind>::Unsupported.kind(), ErrorKind::Other);
    }
}
