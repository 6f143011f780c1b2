// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Whole-line queue feeding the USB serial console.
//!
//! Diagnostics are rendered to text on the core that emits them and queued
//! as complete lines. Both cores push, a single task drains. A line is
//! either queued entirely or rejected, so the queue never holds a fragment.

use core::fmt::{self, Write as _};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use crate::config::{CONSOLE_LINE_CAPACITY, CONSOLE_QUEUE_DEPTH};
use crate::diagnostics::Diagnostic;

/// One rendered diagnostic, terminated by `\r\n`.
pub type ConsoleLine = String<CONSOLE_LINE_CAPACITY>;

/// Why a diagnostic did not make it into the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineRejected {
    /// Rendered text exceeds `CONSOLE_LINE_CAPACITY`
    TooLong,
    /// Every slot holds a line the host has not read yet
    QueueFull,
}

impl fmt::Display for LineRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRejected::TooLong => f.write_str("console line too long"),
            LineRejected::QueueFull => f.write_str("console queue full"),
        }
    }
}

impl core::error::Error for LineRejected {}

/// Renders a diagnostic as a terminal line.
pub fn render(diagnostic: &Diagnostic) -> Result<ConsoleLine, LineRejected> {
    let mut line = ConsoleLine::new();
    write!(line, "{}\r\n", diagnostic).map_err(|_| LineRejected::TooLong)?;
    Ok(line)
}

/// Bounded queue of console lines, usable in a `static`.
pub struct LineQueue<M: RawMutex> {
    inner: Channel<M, ConsoleLine, CONSOLE_QUEUE_DEPTH>,
}

impl<M: RawMutex> LineQueue<M> {
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Renders and enqueues a diagnostic without waiting.
    pub fn push(&self, diagnostic: &Diagnostic) -> Result<(), LineRejected> {
        let line = render(diagnostic)?;
        self.inner
            .try_send(line)
            .map_err(|_| LineRejected::QueueFull)
    }

    /// Waits for the oldest queued line.
    pub async fn next(&self) -> ConsoleLine {
        self.inner.receive().await
    }

    /// Discards every queued line and returns how many there were.
    pub fn clear(&self) -> usize {
        let mut discarded = 0;
        while self.inner.try_receive().is_ok() {
            discarded += 1;
        }
        discarded
    }
}

impl<M: RawMutex> Default for LineQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}
