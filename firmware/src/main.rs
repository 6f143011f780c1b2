// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! BitDogLab Dual-Core Activity Monitor
//!
//! This firmware uses both cores of the Raspberry Pi Pico on the BitDogLab
//! board to monitor an "activity level" simulated by the analog joystick.
//! Core 0 samples the joystick and hands the level to core 1, which drives
//! the RGB LED and the buzzer.
//!
//! # Hardware Configuration
//! - **Microcontroller**: RP2040 (dual ARM Cortex-M0+)
//! - **Joystick X axis**: GPIO 27 (ADC input 1)
//! - **RGB LED**: red on GPIO 13, green on GPIO 11, blue on GPIO 12 (PWM)
//! - **Buzzer A**: GPIO 21 (PWM, ~2 kHz tone)
//!
//! # Activity Levels
//! | Joystick X  | Level    | LED   | Buzzer |
//! |-------------|----------|-------|--------|
//! | 0-1365      | Low      | green | off    |
//! | 1366-2730   | Moderate | blue  | off    |
//! | 2731-4095   | High     | red   | on     |
//!
//! # Features
//! - Joystick sampled every 2 s on core 0
//! - Single-slot hand-off to core 1; a sample is dropped, never queued, if
//!   core 1 has not taken the previous one
//! - Diagnostics over defmt RTT and a USB serial console
//!
//! # Build
//! ```bash
//! cd firmware
//! cargo build --release
//! ```
//!
//! # Flash
//! ```bash
//! cd firmware
//! cargo run --release
//! ```

#![no_std]
#![no_main]

mod console;
mod joystick;

use activity_core::actuator::Actuator;
use activity_core::channel::{StateChannel, StateReceiver};
use activity_core::config::{BUZZER_PWM_TOP, LED_PWM_TOP, PWM_INITIAL_COMPARE, SAMPLE_PERIOD_MS};
use activity_core::diagnostics::{Diagnostic, DiagnosticSink};
use activity_core::indicator::{Buzzer, RgbIndicator};
use activity_core::mirror::StateMirror;
use activity_core::sampler::Sampler;
use defmt::*;
use embassy_executor::{Executor, Spawner};
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::Pull;
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::USB;
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use embassy_rp::usb::{self, Driver};
use embassy_rp::{bind_interrupts, Peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::console::Console;
use crate::joystick::Joystick;

/// Program metadata for picotool info command
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Activity Monitor"),
    embassy_rp::binary_info::rp_program_description!(
        c"BitDogLab dual-core joystick activity monitor"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => usb::InterruptHandler<USB>;
});

/// Actuator wired to the board's PWM outputs
type BoardActuator = Actuator<
    'static,
    PwmOutput<'static>,
    PwmOutput<'static>,
    PwmOutput<'static>,
    PwmOutput<'static>,
>;

/// Sampler reading the joystick and feeding the cross-core channel
type BoardSampler = Sampler<'static, Joystick, CriticalSectionRawMutex>;

static mut CORE1_STACK: Stack<4096> = Stack::new();
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

/// Activity codes from core 0 to core 1
static STATE_CHANNEL: StateChannel<CriticalSectionRawMutex> = StateChannel::new();

/// Last code applied by core 1
static STATE_MIRROR: StaticCell<StateMirror> = StaticCell::new();

/// Core 0 entry point
///
/// Starts the core 0 executor with the bootstrap task. Once bootstrap
/// returns, core 0 only wakes for the sampling ticker and USB events; the
/// executor sleeps in WFE in between.
#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| unwrap!(spawner.spawn(bootstrap(spawner, p))));
}

/// One-time bring-up
///
/// # Initialization Sequence
/// 1. Start the USB console and wait for a terminal
/// 2. Configure the joystick ADC input
/// 3. Configure the RGB LED PWM outputs (16-bit, dark)
/// 4. Configure the buzzer PWM output (~2 kHz, silent)
/// 5. Launch the actuator on core 1
/// 6. Arm the sampling ticker on core 0
#[embassy_executor::task]
async fn bootstrap(spawner: Spawner, p: Peripherals) {
    let mut diag = Console;

    let (usb_device, serial) = console::build(Driver::new(p.USB, Irqs));
    unwrap!(spawner.spawn(console::usb_task(usb_device)));
    unwrap!(spawner.spawn(console::console_task(serial)));
    #[cfg(feature = "wait-for-host")]
    console::wait_for_host().await;
    diag.emit(&Diagnostic::Boot);

    // Joystick X axis on ADC input 1
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let joystick_x = adc::Channel::new_pin(p.PIN_27, Pull::None);

    // RGB LED: blue (A) and red (B) share slice 6, green is slice 5 B
    let mut led_config = PwmConfig::default();
    led_config.top = LED_PWM_TOP;
    led_config.compare_a = PWM_INITIAL_COMPARE;
    led_config.compare_b = PWM_INITIAL_COMPARE;
    let (blue, red) =
        Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, led_config.clone()).split();
    let (_, green) = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, led_config).split();

    // Buzzer A on slice 2 B; top sets the tone frequency
    let mut buzzer_config = PwmConfig::default();
    buzzer_config.top = BUZZER_PWM_TOP;
    buzzer_config.compare_b = PWM_INITIAL_COMPARE;
    let (_, buzzer) = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, buzzer_config).split();
    diag.emit(&Diagnostic::PeripheralsReady);

    let mirror = STATE_MIRROR.init(StateMirror::new());
    let (mirror_writer, mirror_reader) = mirror.split();
    let actuator: BoardActuator = Actuator::new(
        RgbIndicator::new(unwrap!(red), unwrap!(green), unwrap!(blue)),
        Buzzer::new(unwrap!(buzzer)),
        mirror_writer,
    );
    let receiver = STATE_CHANNEL.receiver();

    diag.emit(&Diagnostic::LaunchingActuator);
    spawn_core1(
        p.CORE1,
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || {
            let executor1 = EXECUTOR1.init(Executor::new());
            executor1.run(|spawner| unwrap!(spawner.spawn(actuator_task(actuator, receiver))));
        },
    );
    diag.emit(&Diagnostic::ActuatorLaunched);

    let sampler: BoardSampler = Sampler::new(
        Joystick::new(adc, joystick_x),
        STATE_CHANNEL.sender(),
        mirror_reader,
    );
    unwrap!(spawner.spawn(sampler_task(sampler)));
    diag.emit(&Diagnostic::SamplerArmed {
        period_ms: SAMPLE_PERIOD_MS,
    });
}

/// Core 0: one sampling tick every `SAMPLE_PERIOD_MS`, first one a full
/// period after arming.
#[embassy_executor::task]
async fn sampler_task(mut sampler: BoardSampler) -> ! {
    let mut diag = Console;
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    loop {
        ticker.next().await;
        sampler.tick(&mut diag);
    }
}

/// Core 1: wait for a level, drive the LED and buzzer, repeat.
#[embassy_executor::task]
async fn actuator_task(
    actuator: BoardActuator,
    receiver: StateReceiver<'static, CriticalSectionRawMutex>,
) -> ! {
    actuator.run(receiver, Console).await
}
