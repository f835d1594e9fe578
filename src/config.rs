//! Register map of the IS31FL3216A.

pub const CONFIGURATION_REGISTER: u8 = 0x00;
pub const CONTROL_REGISTER_1: u8 = 0x01;
pub const CONTROL_REGISTER_2: u8 = 0x02;
pub const PWM_REGISTER_FIRST: u8 = 0x10;
pub const PWM_REGISTER_LAST: u8 = 0x1f;
pub const UPDATE_REGISTER: u8 = 0xb0;

pub const CONFIGURATION_NORMAL_OPERATION: u8 = 0x00;
pub const CONTROL_ALL_CHANNELS_ENABLED: u8 = 0xff;
/// The update register is a trigger, any value latches the pending PWM data.
pub const UPDATE_LATCH: u8 = 0x00;

pub const LED_COUNT: u8 = 16;
pub const MAX_BRIGHTNESS_PERCENT: u8 = 100;

/// A single `(register, value)` write.
pub type RegisterWrite = (u8, u8);

pub const INIT_SEQUENCE_LEN: usize = 2 + LED_COUNT as usize + 2;

/// Writes issued by `initialize`, in order: both control registers, every PWM
/// register, the latch, then the configuration register.
pub const INIT_SEQUENCE: [RegisterWrite; INIT_SEQUENCE_LEN] = init_sequence();

const fn init_sequence() -> [RegisterWrite; INIT_SEQUENCE_LEN] {
    let mut sequence = [(0, 0); INIT_SEQUENCE_LEN];

    sequence[0] = (CONTROL_REGISTER_1, CONTROL_ALL_CHANNELS_ENABLED);
    sequence[1] = (CONTROL_REGISTER_2, CONTROL_ALL_CHANNELS_ENABLED);

    let mut offset = 0;
    while offset < LED_COUNT {
        sequence[2 + offset as usize] = (PWM_REGISTER_FIRST + offset, 0x00);
        offset += 1;
    }

    sequence[INIT_SEQUENCE_LEN - 2] = (UPDATE_REGISTER, UPDATE_LATCH);
    sequence[INIT_SEQUENCE_LEN - 1] =
        (CONFIGURATION_REGISTER, CONFIGURATION_NORMAL_OPERATION);

    sequence
}

/// PWM register of `led`. Addressing is reversed, LED 0 sits at the highest
/// PWM address. `None` if `led` is not below [`LED_COUNT`].
pub const fn pwm_register(led: u8) -> Option<u8> {
    if led < LED_COUNT {
        Some(PWM_REGISTER_LAST - led)
    } else {
        None
    }
}

/// Scales a brightness percentage (0..=100) to a raw 8-bit duty cycle,
/// truncating.
pub const fn scale_brightness(percent: u8) -> u8 {
    ((0xff * percent as u16) / MAX_BRIGHTNESS_PERCENT as u16) as u8
}
