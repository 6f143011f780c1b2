// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Activity level definitions and joystick sample classification.
//!
//! The joystick X axis stands in for a physical activity sensor. Each raw
//! 12-bit reading is bucketed into one of three levels:
//!
//! ```text
//!   0 ......... 1365 ......... 2730 ......... 4095
//!   |    Low     |   Moderate   |     High     |
//! ```
//!
//! Both limits are inclusive on the upper side: 1365 is `Low` and 2730 is
//! `Moderate`.
//!
//! # Wire Codes
//!
//! Levels cross between cores as single bytes:
//!
//! - **0**: reserved, no reading yet
//! - **1**: Low
//! - **2**: Moderate
//! - **3**: High

use core::fmt;

use crate::config::{LOW_ACTIVITY_LIMIT, MODERATE_ACTIVITY_LIMIT};

/// Code recorded before any level has been dispatched.
pub const NO_READING: u8 = 0;

/// Discretized activity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ActivityLevel {
    /// Joystick in the lower third
    Low = 1,
    /// Joystick in the middle third
    Moderate = 2,
    /// Joystick in the upper third
    High = 3,
}

impl ActivityLevel {
    /// Classifies a raw ADC sample.
    ///
    /// # Arguments
    ///
    /// * `raw` - 12-bit ADC reading (0-4095). Values above the ADC range
    ///   classify as `High`.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_core::level::ActivityLevel;
    ///
    /// assert_eq!(ActivityLevel::classify(1365), ActivityLevel::Low);
    /// assert_eq!(ActivityLevel::classify(1366), ActivityLevel::Moderate);
    /// assert_eq!(ActivityLevel::classify(4000), ActivityLevel::High);
    /// ```
    pub const fn classify(raw: u16) -> Self {
        if raw <= LOW_ACTIVITY_LIMIT {
            ActivityLevel::Low
        } else if raw <= MODERATE_ACTIVITY_LIMIT {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::High
        }
    }

    /// Converts a wire code back into a level.
    ///
    /// Returns `None` for the reserved code 0 and anything above 3.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ActivityLevel::Low),
            2 => Some(ActivityLevel::Moderate),
            3 => Some(ActivityLevel::High),
            _ => None,
        }
    }

    /// Returns the wire code for this level.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_range_is_inclusive_of_limit() {
        for raw in [0, 1, 500, 1364, 1365] {
            assert_eq!(ActivityLevel::classify(raw), ActivityLevel::Low, "raw = {raw}");
        }
    }

    #[test]
    fn moderate_range_is_inclusive_of_upper_limit() {
        for raw in [1366, 2000, 2729, 2730] {
            assert_eq!(ActivityLevel::classify(raw), ActivityLevel::Moderate, "raw = {raw}");
        }
    }

    #[test]
    fn high_range_runs_to_full_scale() {
        for raw in [2731, 4000, 4095] {
            assert_eq!(ActivityLevel::classify(raw), ActivityLevel::High, "raw = {raw}");
        }
    }

    #[test]
    fn every_sample_maps_to_exactly_one_level() {
        let mut counts = [0u32; 3];
        for raw in 0..=4095u16 {
            counts[(ActivityLevel::classify(raw).code() - 1) as usize] += 1;
        }
        assert_eq!(counts, [1366, 1365, 1365]);
    }

    #[test]
    fn codes_round_trip() {
        for level in [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High] {
            assert_eq!(ActivityLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(ActivityLevel::from_code(NO_READING), None);
        assert_eq!(ActivityLevel::from_code(4), None);
    }

    #[test]
    fn display_uses_level_name() {
        assert_eq!(ActivityLevel::Moderate.to_string(), "Moderate");
    }
}
