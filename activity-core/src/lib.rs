// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware-independent core of the BitDogLab dual-core activity monitor.
//!
//! Core 0 samples the joystick X axis every two seconds, classifies the
//! reading into an [`ActivityLevel`](level::ActivityLevel) and pushes it into
//! a single-slot [`StateChannel`](channel::StateChannel). Core 1 waits on
//! that channel and drives the RGB LED and the buzzer.
//!
//! ```text
//!  core 0                                       core 1
//!  Ticker ─▶ Sampler::tick ─▶ StateChannel ─▶ Actuator::serve ─▶ LED + buzzer
//!                 ▲            (depth 1)            │
//!                 └────────── StateMirror ◀─────────┘
//! ```
//!
//! Nothing in this crate touches a peripheral register. Outputs go through
//! [`embedded_hal::pwm::SetDutyCycle`], the sensor through
//! [`AnalogSensor`](sampler::AnalogSensor) and logging through
//! [`DiagnosticSink`](diagnostics::DiagnosticSink), so the whole pipeline
//! runs in host tests.
//!
//! # Crate Features
//!
//! - `defmt`: derives `defmt::Format` for the public types.

#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod channel;
pub mod config;
pub mod console;
pub mod diagnostics;
pub mod indicator;
pub mod level;
pub mod mirror;
pub mod sampler;

#[cfg(test)]
mod testing;
