// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Core 0 sampling tick: read the joystick, classify, hand off.
//!
//! The sampler owns no timer. The firmware drives [`Sampler::tick`] from a
//! fixed-period ticker (every `SAMPLE_PERIOD_MS`), so each tick runs to
//! completion and the core sleeps in between.
//!
//! # Delivery Policy
//!
//! Delivery never waits. When the state channel still holds the previous
//! level, the new one is discarded and a single warning is emitted. There
//! is no retry and no latest-value buffer: the next tick, one period later,
//! produces a fresh reading anyway.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::StateSender;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::level::ActivityLevel;
use crate::mirror::MirrorReader;

/// Source of raw 12-bit samples.
pub trait AnalogSensor {
    /// Error reported by the underlying converter.
    type Error;

    /// Takes one reading in the range 0-4095.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Result of a single sampling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The level was accepted by the channel
    Sent(ActivityLevel),
    /// The channel was full and the level was discarded
    Dropped(ActivityLevel),
    /// No reading could be taken
    SensorFault,
}

/// Periodic producer of activity levels.
pub struct Sampler<'a, S, M: RawMutex> {
    sensor: S,
    sender: StateSender<'a, M>,
    mirror: MirrorReader<'a>,
}

impl<'a, S, M> Sampler<'a, S, M>
where
    S: AnalogSensor,
    M: RawMutex,
{
    /// Creates a sampler feeding `sender`.
    ///
    /// # Arguments
    ///
    /// * `sensor` - joystick axis (or any other 12-bit source)
    /// * `sender` - producer side of the state channel
    /// * `mirror` - read-only view of the last dispatched code, reported in
    ///   each tick's diagnostic
    pub fn new(sensor: S, sender: StateSender<'a, M>, mirror: MirrorReader<'a>) -> Self {
        Self {
            sensor,
            sender,
            mirror,
        }
    }

    /// Runs one sampling tick.
    ///
    /// Emits one `Sampled` diagnostic per successful reading and, when the
    /// channel is full, exactly one `SampleDropped` warning.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    /// loop {
    ///     ticker.next().await;
    ///     sampler.tick(&mut console);
    /// }
    /// ```
    pub fn tick<D: DiagnosticSink>(&mut self, sink: &mut D) -> TickOutcome {
        let raw = match self.sensor.read() {
            Ok(raw) => raw,
            Err(_) => {
                sink.emit(&Diagnostic::SensorFault);
                return TickOutcome::SensorFault;
            }
        };

        let level = ActivityLevel::classify(raw);
        sink.emit(&Diagnostic::Sampled {
            raw,
            level,
            last_dispatched: self.mirror.code(),
        });

        match self.sender.try_send(level) {
            Ok(()) => TickOutcome::Sent(level),
            Err(_) => {
                sink.emit(&Diagnostic::SampleDropped { level });
                TickOutcome::Dropped(level)
            }
        }
    }
}
