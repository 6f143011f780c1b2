// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Output drivers for the RGB indicator and the buzzer.
//!
//! Both drivers are generic over [`SetDutyCycle`], so the same code runs on
//! the RP2040 PWM slices and on the recording fakes used by the tests.
//!
//! # Hardware Interface
//!
//! - 3 PWM channels (16-bit range) for the red, green and blue LED dies
//! - 1 PWM channel for buzzer A, with its top tuned for a ~2 kHz tone
//!
//! # Examples
//!
//! ```ignore
//! use activity_core::indicator::{Buzzer, Color, RgbIndicator};
//!
//! let mut indicator = RgbIndicator::new(red, green, blue);
//! let mut buzzer = Buzzer::new(buzzer_pwm);
//!
//! indicator.show(Color::Red);
//! buzzer.set(true);
//! ```

use core::fmt;

use embedded_hal::pwm::SetDutyCycle;

use crate::config::{BUZZER_ON_DUTY, LED_MAX_BRIGHTNESS};
use crate::level::ActivityLevel;

/// Colour shown by the indicator for a dispatched code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Low activity
    Green,
    /// Moderate activity
    Blue,
    /// High activity
    Red,
    /// Unknown code
    Off,
}

impl Color {
    /// Colour for a raw activity code. Codes outside 1-3 turn the LED off.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_core::indicator::Color;
    ///
    /// assert_eq!(Color::for_code(1), Color::Green);
    /// assert_eq!(Color::for_code(0), Color::Off);
    /// ```
    pub const fn for_code(code: u8) -> Self {
        match ActivityLevel::from_code(code) {
            Some(ActivityLevel::Low) => Color::Green,
            Some(ActivityLevel::Moderate) => Color::Blue,
            Some(ActivityLevel::High) => Color::Red,
            None => Color::Off,
        }
    }

    /// Duty cycles for the (red, green, blue) channels.
    pub const fn rgb(self) -> (u16, u16, u16) {
        match self {
            Color::Green => (0, LED_MAX_BRIGHTNESS, 0),
            Color::Blue => (0, 0, LED_MAX_BRIGHTNESS),
            Color::Red => (LED_MAX_BRIGHTNESS, 0, 0),
            Color::Off => (0, 0, 0),
        }
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Off => "off",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three-channel PWM LED.
pub struct RgbIndicator<R, G, B> {
    /// Red die PWM channel
    red: R,
    /// Green die PWM channel
    green: G,
    /// Blue die PWM channel
    blue: B,
}

impl<R, G, B> RgbIndicator<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Wraps three configured PWM channels.
    ///
    /// The channels are expected to start at zero duty; nothing is written
    /// until the first call to [`show`](Self::show).
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Drives all three channels to the duty cycles of `color`.
    ///
    /// Every channel is written on every call, so showing the same colour
    /// twice leaves the outputs unchanged.
    pub fn show(&mut self, color: Color) {
        let (r, g, b) = color.rgb();
        self.set_rgb(r, g, b);
    }

    /// Sets raw duty cycles (0-65535) on the three channels.
    pub fn set_rgb(&mut self, r: u16, g: u16, b: u16) {
        self.red.set_duty_cycle(r).ok();
        self.green.set_duty_cycle(g).ok();
        self.blue.set_duty_cycle(b).ok();
    }
}

/// PWM-driven piezo buzzer, either silent or sounding at 50% duty.
pub struct Buzzer<P> {
    pwm: P,
}

impl<P: SetDutyCycle> Buzzer<P> {
    /// Wraps the buzzer PWM channel. Its top must be `BUZZER_PWM_TOP`.
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Turns the tone on or off.
    pub fn set(&mut self, on: bool) {
        let duty = if on { BUZZER_ON_DUTY } else { 0 };
        self.pwm.set_duty_cycle(duty).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LED_PWM_TOP;
    use crate::testing::FakePwm;
    use core::cell::RefCell;

    #[test]
    fn each_level_has_its_own_color() {
        assert_eq!(Color::for_code(ActivityLevel::Low.code()).rgb(), (0, 30000, 0));
        assert_eq!(Color::for_code(ActivityLevel::Moderate.code()).rgb(), (0, 0, 30000));
        assert_eq!(Color::for_code(ActivityLevel::High.code()).rgb(), (30000, 0, 0));
    }

    #[test]
    fn unknown_codes_turn_the_indicator_off() {
        for code in [0, 4, 42, 255] {
            assert_eq!(Color::for_code(code), Color::Off);
            assert_eq!(Color::for_code(code).rgb(), (0, 0, 0));
        }
    }

    #[test]
    fn show_writes_every_channel() {
        let (r, g, b) = (RefCell::default(), RefCell::default(), RefCell::default());
        let mut indicator = RgbIndicator::new(
            FakePwm::new(&r, LED_PWM_TOP),
            FakePwm::new(&g, LED_PWM_TOP),
            FakePwm::new(&b, LED_PWM_TOP),
        );

        indicator.show(Color::Blue);
        indicator.show(Color::Off);

        assert_eq!(*r.borrow(), [0, 0]);
        assert_eq!(*g.borrow(), [0, 0]);
        assert_eq!(*b.borrow(), [LED_MAX_BRIGHTNESS, 0]);
    }

    #[test]
    fn buzzer_toggles_between_silent_and_half_duty() {
        let writes = RefCell::default();
        let mut buzzer = Buzzer::new(FakePwm::new(&writes, crate::config::BUZZER_PWM_TOP));

        buzzer.set(true);
        buzzer.set(false);

        assert_eq!(*writes.borrow(), [31249, 0]);
    }
}
