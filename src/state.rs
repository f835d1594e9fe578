/// Lifecycle of the chip as seen by the driver.
///
/// The chip only holds brightness data once the initialization sequence has
/// fully completed. Any failure during `initialize` leaves the driver in
/// `Uninitialized`, the chip can be re-initialized from there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    #[default]
    Uninitialized,
    Ready,
}
