// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! End-to-end: joystick sample on the producer side, LED and buzzer duty on
//! the consumer side, with the state channel in between.

use core::cell::RefCell;
use core::convert::Infallible;

use activity_core::actuator::Actuator;
use activity_core::channel::StateChannel;
use activity_core::config::{BUZZER_ON_DUTY, BUZZER_PWM_TOP, LED_MAX_BRIGHTNESS, LED_PWM_TOP};
use activity_core::diagnostics::{Diagnostic, DiagnosticSink};
use activity_core::indicator::{Buzzer, RgbIndicator};
use activity_core::level::ActivityLevel;
use activity_core::mirror::StateMirror;
use activity_core::sampler::{AnalogSensor, Sampler, TickOutcome};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

struct Channel<'a> {
    writes: &'a RefCell<Vec<u16>>,
    top: u16,
}

impl ErrorType for Channel<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for Channel<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.top
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(duty);
        Ok(())
    }
}

struct Joystick<'a> {
    next: &'a RefCell<u16>,
}

impl AnalogSensor for Joystick<'_> {
    type Error = Infallible;

    fn read(&mut self) -> Result<u16, Infallible> {
        Ok(*self.next.borrow())
    }
}

#[derive(Default)]
struct Log(Vec<Diagnostic>);

impl DiagnosticSink for Log {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.0.push(*diagnostic);
    }
}

#[derive(Default)]
struct Board {
    joystick: RefCell<u16>,
    red: RefCell<Vec<u16>>,
    green: RefCell<Vec<u16>>,
    blue: RefCell<Vec<u16>>,
    buzzer: RefCell<Vec<u16>>,
}

impl Board {
    fn last(writes: &RefCell<Vec<u16>>) -> u16 {
        writes.borrow().last().copied().unwrap_or(0)
    }

    fn rgb(&self) -> (u16, u16, u16) {
        (Self::last(&self.red), Self::last(&self.green), Self::last(&self.blue))
    }

    fn buzzer(&self) -> u16 {
        Self::last(&self.buzzer)
    }
}

/// Runs one sample per entry through sampler, channel and actuator.
fn run_ticks(board: &Board, samples: &[u16]) -> (Vec<TickOutcome>, Log) {
    let channel = StateChannel::<NoopRawMutex>::new();
    let mut mirror = StateMirror::new();
    let (writer, reader) = mirror.split();

    let mut sampler = Sampler::new(
        Joystick {
            next: &board.joystick,
        },
        channel.sender(),
        reader,
    );
    let mut actuator = Actuator::new(
        RgbIndicator::new(
            Channel {
                writes: &board.red,
                top: LED_PWM_TOP,
            },
            Channel {
                writes: &board.green,
                top: LED_PWM_TOP,
            },
            Channel {
                writes: &board.blue,
                top: LED_PWM_TOP,
            },
        ),
        Buzzer::new(Channel {
            writes: &board.buzzer,
            top: BUZZER_PWM_TOP,
        }),
        writer,
    );

    let receiver = channel.receiver();
    let mut log = Log::default();
    let mut outcomes = Vec::new();
    for &raw in samples {
        *board.joystick.borrow_mut() = raw;
        let outcome = sampler.tick(&mut log);
        if let TickOutcome::Sent(_) = outcome {
            block_on(actuator.serve(&receiver, &mut log));
        }
        outcomes.push(outcome);
    }
    (outcomes, log)
}

fn sampled_level(log: &Log) -> Option<ActivityLevel> {
    log.0.iter().find_map(|event| match event {
        Diagnostic::Sampled { level, .. } => Some(*level),
        _ => None,
    })
}

#[test]
fn low_sample_shows_green_silently() {
    let board = Board::default();
    let (outcomes, log) = run_ticks(&board, &[500]);

    assert_eq!(outcomes, [TickOutcome::Sent(ActivityLevel::Low)]);
    assert_eq!(sampled_level(&log).map(ActivityLevel::name), Some("Low"));
    assert_eq!(board.rgb(), (0, LED_MAX_BRIGHTNESS, 0));
    assert_eq!(board.buzzer(), 0);
}

#[test]
fn moderate_sample_shows_blue_silently() {
    let board = Board::default();
    let (_, log) = run_ticks(&board, &[2000]);

    assert_eq!(sampled_level(&log).map(ActivityLevel::name), Some("Moderate"));
    assert_eq!(board.rgb(), (0, 0, LED_MAX_BRIGHTNESS));
    assert_eq!(board.buzzer(), 0);
}

#[test]
fn high_sample_shows_red_and_sounds_buzzer() {
    let board = Board::default();
    let (_, log) = run_ticks(&board, &[4000]);

    assert_eq!(sampled_level(&log).map(ActivityLevel::name), Some("High"));
    assert_eq!(board.rgb(), (LED_MAX_BRIGHTNESS, 0, 0));
    assert_eq!(board.buzzer(), BUZZER_ON_DUTY);
    assert_eq!(BUZZER_ON_DUTY, BUZZER_PWM_TOP / 2);
}

#[test]
fn consecutive_high_ticks_never_silence_the_buzzer() {
    let board = Board::default();
    run_ticks(&board, &[4000, 4000]);

    // Every write after the first keeps the tone at 50%; no zero in between.
    assert_eq!(*board.buzzer.borrow(), [BUZZER_ON_DUTY, BUZZER_ON_DUTY]);
    assert_eq!(board.rgb(), (LED_MAX_BRIGHTNESS, 0, 0));
}

#[test]
fn levels_reach_the_outputs_in_sampling_order() {
    let board = Board::default();
    let (outcomes, log) = run_ticks(&board, &[4000, 100, 1365, 1366, 2730, 2731]);

    let dispatched: Vec<u8> = log
        .0
        .iter()
        .filter_map(|event| match event {
            Diagnostic::Dispatched { code, .. } => Some(*code),
            _ => None,
        })
        .collect();
    assert_eq!(dispatched, [3, 1, 1, 2, 2, 3]);
    assert!(outcomes.iter().all(|o| matches!(o, TickOutcome::Sent(_))));
}

#[test]
fn sampler_reports_what_the_actuator_last_applied() {
    let board = Board::default();
    let (_, log) = run_ticks(&board, &[4000, 500]);

    let last_seen: Vec<u8> = log
        .0
        .iter()
        .filter_map(|event| match event {
            Diagnostic::Sampled { last_dispatched, .. } => Some(*last_dispatched),
            _ => None,
        })
        .collect();
    assert_eq!(last_seen, [0, 3]);
}
