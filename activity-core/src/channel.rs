// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Single-slot hand-off of activity codes between the two cores.
//!
//! The sampler on core 0 pushes without ever waiting: if the slot is still
//! occupied the new level is rejected and the caller drops it. The actuator
//! on core 1 awaits the next code and is suspended until one arrives.
//! Codes are delivered in the order they were accepted.
//!
//! The raw mutex type selects the locking strategy. The firmware uses
//! `CriticalSectionRawMutex`, which on the RP2040 also takes the hardware
//! spinlock so both cores can share the channel.

use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::STATE_CHANNEL_DEPTH;
use crate::level::ActivityLevel;

/// Returned by [`StateSender::try_send`] when the slot is still occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelFull(pub ActivityLevel);

impl fmt::Display for ChannelFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state channel full, {} not delivered", self.0)
    }
}

impl core::error::Error for ChannelFull {}

/// Capacity-bounded channel of activity codes.
pub struct StateChannel<M: RawMutex> {
    inner: Channel<M, u8, STATE_CHANNEL_DEPTH>,
}

impl<M: RawMutex> StateChannel<M> {
    /// Creates an empty channel, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Producer handle for the sampling side.
    pub fn sender(&self) -> StateSender<'_, M> {
        StateSender {
            inner: self.inner.sender(),
        }
    }

    /// Consumer handle for the actuation side.
    pub fn receiver(&self) -> StateReceiver<'_, M> {
        StateReceiver {
            inner: self.inner.receiver(),
        }
    }
}

impl<M: RawMutex> Default for StateChannel<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blocking producer side of a [`StateChannel`].
pub struct StateSender<'a, M: RawMutex> {
    inner: Sender<'a, M, u8, STATE_CHANNEL_DEPTH>,
}

impl<M: RawMutex> Clone for StateSender<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex> Copy for StateSender<'_, M> {}

impl<'a, M: RawMutex> StateSender<'a, M> {
    /// Pushes a level if the slot is free.
    ///
    /// Never waits and never replaces a pending code. On `Err` the level was
    /// not enqueued.
    pub fn try_send(&self, level: ActivityLevel) -> Result<(), ChannelFull> {
        self.inner
            .try_send(level.code())
            .map_err(|_| ChannelFull(level))
    }
}

/// Blocking consumer side of a [`StateChannel`].
pub struct StateReceiver<'a, M: RawMutex> {
    inner: Receiver<'a, M, u8, STATE_CHANNEL_DEPTH>,
}

impl<M: RawMutex> Clone for StateReceiver<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex> Copy for StateReceiver<'_, M> {}

impl<'a, M: RawMutex> StateReceiver<'a, M> {
    /// Waits for the next code.
    pub async fn receive(&self) -> u8 {
        self.inner.receive().await
    }

    /// Takes the pending code without waiting, if there is one.
    #[cfg(test)]
    pub(crate) fn try_receive(&self) -> Option<u8> {
        self.inner.try_receive().ok()
    }
}
