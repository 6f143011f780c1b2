// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Diagnostic events reported by the sampler, the actuator and the bootstrap.
//!
//! Components never format log text themselves. They hand a typed
//! [`Diagnostic`] to a [`DiagnosticSink`]; the firmware sink forwards it to
//! `defmt` and to the USB console, the test sink records it.
//!
//! The [`Display`](core::fmt::Display) rendering is for humans only and is
//! not a stable format.

use core::fmt;

use crate::indicator::Color;
use crate::level::ActivityLevel;

/// Something worth telling the host about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Console is up and the monitor is starting
    Boot,
    /// Peripherals are configured
    PeripheralsReady,
    /// About to start the actuator on core 1
    LaunchingActuator,
    /// Core 1 has been released
    ActuatorLaunched,
    /// Actuator is running and waiting for its first level
    ActuatorWaiting,
    /// Periodic sampling is armed on core 0
    SamplerArmed { period_ms: u64 },
    /// One sampling tick read and classified the joystick
    Sampled {
        raw: u16,
        level: ActivityLevel,
        last_dispatched: u8,
    },
    /// The state channel was still full, the level was discarded
    SampleDropped { level: ActivityLevel },
    /// The ADC read failed, the tick was skipped
    SensorFault,
    /// The actuator applied a received code to the outputs
    Dispatched { code: u8, color: Color, alert: bool },
}

impl Diagnostic {
    /// Whether the event reports lost or missing data.
    pub const fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::SampleDropped { .. } | Diagnostic::SensorFault)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Boot => f.write_str("BitDogLab dual-core activity monitor started"),
            Diagnostic::PeripheralsReady => f.write_str("ADC, LED and buzzer PWM configured"),
            Diagnostic::LaunchingActuator => f.write_str("launching core 1"),
            Diagnostic::ActuatorLaunched => f.write_str("core 1 launched"),
            Diagnostic::ActuatorWaiting => f.write_str("core 1: started, waiting for state"),
            Diagnostic::SamplerArmed { period_ms } => {
                write!(f, "core 0: joystick sampling armed every {} ms", period_ms)
            }
            Diagnostic::Sampled {
                raw,
                level,
                last_dispatched,
            } => write!(
                f,
                "core 0: joystick x = {}, state = {} ({}), last dispatched = {}",
                raw,
                level.code(),
                level,
                last_dispatched
            ),
            Diagnostic::SampleDropped { level } => {
                write!(f, "core 0: state channel full, dropped state {} ({})", level.code(), level)
            }
            Diagnostic::SensorFault => f.write_str("core 0: joystick read failed, tick skipped"),
            Diagnostic::Dispatched { code, color, alert } => write!(
                f,
                "core 1: state {} -> led {}, buzzer {}",
                code,
                color,
                if *alert { "on" } else { "off" }
            ),
        }
    }
}

/// Destination for diagnostic events.
pub trait DiagnosticSink {
    /// Reports one event. Must not block for long; sinks drop output they
    /// cannot buffer.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}
