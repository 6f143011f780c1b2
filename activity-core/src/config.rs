// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware configuration and tuning constants for the BitDogLab activity monitor.
//!
//! Every pin assignment, threshold and timing value used by the sampler, the
//! actuator and the firmware bootstrap is defined here exactly once.
//!
//! # Pin Mapping Summary
//!
//! ## Indicator (RGB LED)
//! - **Red**: GPIO 13 (PWM_SLICE6 Channel B)
//! - **Green**: GPIO 11 (PWM_SLICE5 Channel B)
//! - **Blue**: GPIO 12 (PWM_SLICE6 Channel A)
//!
//! ## Alert
//! - **Buzzer A**: GPIO 21 (PWM_SLICE2 Channel B)
//!
//! ## Sensors
//! - **Joystick X axis**: GPIO 27 (ADC input 1)
//!
//! # PWM Configuration
//!
//! - **Indicator**: 16-bit range (0-65535), brightness capped at 30000
//! - **Alert**: top of 62499, which gives ~2 kHz at the 125 MHz system clock;
//!   driven at 50% duty when sounding

/// GPIO pin number for the red indicator channel
#[allow(dead_code)]
pub const LED_RED_PIN: u8 = 13;

/// GPIO pin number for the green indicator channel
#[allow(dead_code)]
pub const LED_GREEN_PIN: u8 = 11;

/// GPIO pin number for the blue indicator channel
#[allow(dead_code)]
pub const LED_BLUE_PIN: u8 = 12;

/// GPIO pin number for buzzer A
#[allow(dead_code)]
pub const BUZZER_PIN: u8 = 21;

/// GPIO pin number for the joystick X axis
#[allow(dead_code)]
pub const JOYSTICK_X_PIN: u8 = 27;

/// ADC input multiplexer channel wired to [`JOYSTICK_X_PIN`]
#[allow(dead_code)]
pub const JOYSTICK_X_ADC_INPUT: u8 = 1;

/// Largest value the 12-bit ADC can return
pub const ADC_MAX_VALUE: u16 = 4095;

/// Highest raw sample still classified as low activity (one third of full scale)
pub const LOW_ACTIVITY_LIMIT: u16 = ADC_MAX_VALUE / 3;

/// Highest raw sample still classified as moderate activity (two thirds of full scale)
pub const MODERATE_ACTIVITY_LIMIT: u16 = 2 * ADC_MAX_VALUE / 3;

/// Interval between joystick samples in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 2000;

/// Interval between joystick samples in microseconds
pub const SAMPLE_PERIOD_US: u64 = SAMPLE_PERIOD_MS * 1000;

/// PWM top value for the indicator channels (16-bit resolution)
pub const LED_PWM_TOP: u16 = 65535;

/// Duty cycle used for a lit indicator channel; keeps the LED below full brightness
pub const LED_MAX_BRIGHTNESS: u16 = 30000;

/// PWM top value for the buzzer, tuned for an audible tone around 2 kHz
pub const BUZZER_PWM_TOP: u16 = 62499;

/// Buzzer duty cycle while sounding (50% of [`BUZZER_PWM_TOP`])
pub const BUZZER_ON_DUTY: u16 = BUZZER_PWM_TOP / 2;

/// Initial PWM compare value for every output (starts dark and silent)
pub const PWM_INITIAL_COMPARE: u16 = 0;

/// Number of activity codes the state channel can hold at once
pub const STATE_CHANNEL_DEPTH: usize = 1;

/// Delay between checks for an attached USB host during bootstrap
pub const HOST_POLL_INTERVAL_MS: u64 = 100;

/// Lines buffered for the USB console before new ones are dropped
pub const CONSOLE_QUEUE_DEPTH: usize = 8;

/// Longest rendered diagnostic line, including the line terminator
pub const CONSOLE_LINE_CAPACITY: usize = 128;
