// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! USB serial console and the firmware diagnostic sink.
//!
//! Every diagnostic is logged through `defmt` over RTT and, as a plain text
//! line, queued for the USB CDC-ACM port. Both cores push into the same
//! [`LineQueue`]; a task on core 0 drains it to the host while a terminal
//! is attached. A line that does not fit is dropped whole, and lines left
//! over from a previous session are discarded when a terminal attaches.
//!
//! # Tasks
//!
//! - [`usb_task`]: runs the USB device stack
//! - [`console_task`]: waits for a terminal, then streams queued lines

use core::sync::atomic::{AtomicBool, Ordering};

use activity_core::config::HOST_POLL_INTERVAL_MS;
use activity_core::console::LineQueue;
use activity_core::diagnostics::{Diagnostic, DiagnosticSink};
use defmt::{info, warn};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Timer;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, UsbDevice};
use static_cell::StaticCell;

/// USB driver for the RP2040 controller.
pub type UsbDriver = Driver<'static, USB>;

/// Full-speed bulk endpoint size.
const MAX_PACKET_SIZE: u16 = 64;

/// Rendered lines waiting for the host.
static CONSOLE_QUEUE: LineQueue<CriticalSectionRawMutex> = LineQueue::new();

/// Set while a terminal holds the serial port open (DTR asserted).
static HOST_ATTACHED: AtomicBool = AtomicBool::new(false);

/// Builds the USB device with a single CDC-ACM interface.
///
/// # Returns
///
/// The device, to be run by [`usb_task`], and the serial class, to be
/// served by [`console_task`].
pub fn build(
    driver: UsbDriver,
) -> (UsbDevice<'static, UsbDriver>, CdcAcmClass<'static, UsbDriver>) {
    let mut config = embassy_usb::Config::new(0xc0de, 0xcafe);
    config.manufacturer = Some("BitDogLab");
    config.product = Some("Dual-Core Activity Monitor");
    config.serial_number = Some("00000001");
    config.max_power = 100;
    config.max_packet_size_0 = MAX_PACKET_SIZE as u8;

    // Windows needs IADs for the composite CDC descriptor set.
    config.device_class = 0xEF;
    config.device_sub_class = 0x02;
    config.device_protocol = 0x01;
    config.composite_with_iads = true;

    static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
    static CDC_STATE: StaticCell<State> = StaticCell::new();

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [],
        CONTROL_BUF.init([0; 64]),
    );
    let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), MAX_PACKET_SIZE);

    (builder.build(), class)
}

/// Runs the USB device stack forever.
#[embassy_executor::task]
pub async fn usb_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}

/// Streams queued diagnostic lines to the attached terminal.
#[embassy_executor::task]
pub async fn console_task(mut class: CdcAcmClass<'static, UsbDriver>) -> ! {
    // One byte short of a full packet, so every write ends the transfer.
    const CHUNK: usize = MAX_PACKET_SIZE as usize - 1;
    loop {
        class.wait_connection().await;
        let stale = CONSOLE_QUEUE.clear();
        if stale > 0 {
            info!("usb console: discarded {} stale lines", stale);
        }
        HOST_ATTACHED.store(true, Ordering::Release);
        info!("usb console: host attached");

        'session: loop {
            let line = CONSOLE_QUEUE.next().await;
            for chunk in line.as_bytes().chunks(CHUNK) {
                if class.write_packet(chunk).await.is_err() {
                    break 'session;
                }
            }
        }

        HOST_ATTACHED.store(false, Ordering::Release);
        info!("usb console: host detached");
    }
}

/// Polls until a terminal has opened the serial port.
///
/// There is no timeout: the monitor is useless without its console.
#[cfg_attr(not(feature = "wait-for-host"), allow(dead_code))]
pub async fn wait_for_host() {
    while !HOST_ATTACHED.load(Ordering::Acquire) {
        Timer::after_millis(HOST_POLL_INTERVAL_MS).await;
    }
}

/// Diagnostic sink writing to `defmt` and the USB console.
///
/// Zero-sized; each task holds its own copy.
#[derive(Clone, Copy, Default)]
pub struct Console;

impl DiagnosticSink for Console {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.is_warning() {
            warn!("{}", diagnostic);
        } else {
            info!("{}", diagnostic);
        }

        CONSOLE_QUEUE.push(diagnostic).ok();
    }
}
