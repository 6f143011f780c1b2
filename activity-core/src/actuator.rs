// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Core 1 actuator: turns received activity codes into light and sound.
//!
//! The actuator alternates between two states forever:
//!
//! ```text
//!   Waiting --(code received)--> Dispatch --(outputs written)--> Waiting
//! ```
//!
//! # Dispatch
//!
//! For every received code, in this order:
//! 1. record the code in the shared mirror
//! 2. buzzer at 50% duty for `High`, silent otherwise
//! 3. indicator green / blue / red for `Low` / `Moderate` / `High`, off for
//!    any other code
//!
//! Outputs depend on the current code only. Dispatching the same code twice
//! writes the same duty cycles twice, so a repeated `High` keeps the buzzer
//! sounding without a gap.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::pwm::SetDutyCycle;

use crate::channel::StateReceiver;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::indicator::{Buzzer, Color, RgbIndicator};
use crate::level::ActivityLevel;
use crate::mirror::MirrorWriter;

/// Outputs applied for one received code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    /// Code taken from the channel
    pub code: u8,
    /// Colour now shown by the indicator
    pub color: Color,
    /// Whether the buzzer is sounding
    pub alert: bool,
}

impl Dispatch {
    /// Outputs for a raw code. Anything but a valid level is dark and silent.
    pub const fn for_code(code: u8) -> Self {
        Self {
            code,
            color: Color::for_code(code),
            alert: code == ActivityLevel::High.code(),
        }
    }
}

/// Consumer of activity codes driving the RGB LED and the buzzer.
pub struct Actuator<'a, R, G, B, Z> {
    /// RGB indicator LED
    indicator: RgbIndicator<R, G, B>,
    /// Buzzer A
    buzzer: Buzzer<Z>,
    /// Sole writer of the shared state mirror
    mirror: MirrorWriter<'a>,
}

impl<'a, R, G, B, Z> Actuator<'a, R, G, B, Z>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
    Z: SetDutyCycle,
{
    /// Creates an actuator over configured outputs.
    ///
    /// # Arguments
    ///
    /// * `indicator` - RGB LED, channels at zero duty
    /// * `buzzer` - buzzer A, silent
    /// * `mirror` - writer half of the shared state mirror
    pub fn new(
        indicator: RgbIndicator<R, G, B>,
        buzzer: Buzzer<Z>,
        mirror: MirrorWriter<'a>,
    ) -> Self {
        Self {
            indicator,
            buzzer,
            mirror,
        }
    }

    /// Applies one received code to the outputs.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let applied = actuator.dispatch(3, &mut console);
    /// assert_eq!(applied.color, Color::Red);
    /// assert!(applied.alert);
    /// ```
    pub fn dispatch<D: DiagnosticSink>(&mut self, code: u8, sink: &mut D) -> Dispatch {
        self.mirror.record(code);

        let applied = Dispatch::for_code(code);
        self.buzzer.set(applied.alert);
        self.indicator.show(applied.color);

        sink.emit(&Diagnostic::Dispatched {
            code,
            color: applied.color,
            alert: applied.alert,
        });
        applied
    }

    /// Waits for the next code, then dispatches it.
    pub async fn serve<M: RawMutex, D: DiagnosticSink>(
        &mut self,
        receiver: &StateReceiver<'_, M>,
        sink: &mut D,
    ) -> Dispatch {
        let code = receiver.receive().await;
        self.dispatch(code, sink)
    }

    /// Serves the channel forever.
    pub async fn run<M: RawMutex, D: DiagnosticSink>(
        mut self,
        receiver: StateReceiver<'_, M>,
        mut sink: D,
    ) -> ! {
        sink.emit(&Diagnostic::ActuatorWaiting);
        loop {
            self.serve(&receiver, &mut sink).await;
        }
    }
}
