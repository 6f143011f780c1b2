// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Host-side fakes shared by the unit tests.

use core::cell::RefCell;
use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::sampler::AnalogSensor;

/// PWM channel that appends every duty write to a shared log.
pub struct FakePwm<'a> {
    writes: &'a RefCell<Vec<u16>>,
    top: u16,
}

impl<'a> FakePwm<'a> {
    pub fn new(writes: &'a RefCell<Vec<u16>>, top: u16) -> Self {
        Self { writes, top }
    }
}

impl ErrorType for FakePwm<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for FakePwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.top
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(duty);
        Ok(())
    }
}

/// Sensor replaying a fixed list of readings, `None` entries fail.
pub struct ScriptedSensor {
    readings: std::vec::IntoIter<Option<u16>>,
}

impl ScriptedSensor {
    pub fn new(readings: &[Option<u16>]) -> Self {
        Self {
            readings: readings.to_vec().into_iter(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SensorFailed;

impl AnalogSensor for ScriptedSensor {
    type Error = SensorFailed;

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.readings.next().flatten().ok_or(SensorFailed)
    }
}

/// Sink that keeps every emitted diagnostic.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<Diagnostic>,
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.events.push(*diagnostic);
    }
}
