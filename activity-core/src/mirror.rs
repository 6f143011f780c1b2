// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Last dispatched activity code, observable from either core.
//!
//! The mirror is split once into a single [`MirrorWriter`], handed to the
//! actuator, and any number of [`MirrorReader`]s. Readers only feed
//! diagnostics; the sampling cadence and the outputs never depend on them.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::level::{ActivityLevel, NO_READING};

/// Atomic byte holding the most recent code processed by the actuator.
pub struct StateMirror {
    code: AtomicU8,
}

impl StateMirror {
    /// Creates a mirror holding [`NO_READING`].
    pub const fn new() -> Self {
        Self {
            code: AtomicU8::new(NO_READING),
        }
    }

    /// Splits the mirror into its writer and a reader.
    ///
    /// The exclusive borrow guarantees that only one writer exists for as
    /// long as the handles live. Store the mirror in a `StaticCell` to get
    /// `'static` handles.
    pub fn split(&mut self) -> (MirrorWriter<'_>, MirrorReader<'_>) {
        let code = &self.code;
        (MirrorWriter { code }, MirrorReader { code })
    }
}

impl Default for StateMirror {
    fn default() -> Self {
        Self::new()
    }
}

/// Sole write access to a [`StateMirror`].
pub struct MirrorWriter<'a> {
    code: &'a AtomicU8,
}

impl MirrorWriter<'_> {
    /// Records the code the actuator just dequeued.
    pub fn record(&mut self, code: u8) {
        self.code.store(code, Ordering::Release);
    }
}

/// Read-only view of a [`StateMirror`].
#[derive(Clone, Copy)]
pub struct MirrorReader<'a> {
    code: &'a AtomicU8,
}

impl MirrorReader<'_> {
    /// Raw code last recorded, [`NO_READING`] before the first dispatch.
    pub fn code(&self) -> u8 {
        self.code.load(Ordering::Acquire)
    }

    /// Last recorded level, if the code is a valid one.
    pub fn level(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_code(self.code())
    }
}
