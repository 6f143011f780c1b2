// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Analog joystick X axis on ADC input 1 (GPIO 27).

use activity_core::sampler::AnalogSensor;
use embassy_rp::adc::{self, Adc, Blocking};

/// Joystick axis read with a one-shot blocking conversion.
pub struct Joystick {
    /// ADC peripheral in blocking mode
    adc: Adc<'static, Blocking>,
    /// Input channel bound to the X axis pin
    axis: adc::Channel<'static>,
}

impl Joystick {
    /// Wraps the ADC and the axis channel.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    /// let axis = adc::Channel::new_pin(p.PIN_27, Pull::None);
    /// let joystick = Joystick::new(adc, axis);
    /// ```
    pub fn new(adc: Adc<'static, Blocking>, axis: adc::Channel<'static>) -> Self {
        Self { adc, axis }
    }
}

impl AnalogSensor for Joystick {
    type Error = adc::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.axis)
    }
}
