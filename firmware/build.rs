// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Build script for the activity monitor firmware
//!
//! This build script configures the linker for the RP2040 microcontroller by:
//! - Copying the memory layout definition to the build output directory
//! - Setting up linker search paths for cortex-m-rt
//! - Passing the cortex-m-rt, embassy-rp and defmt linker scripts
//!
//! # Memory Layout
//! The `memory.x` file defines the RP2040's memory regions:
//! - **BOOT2**: 256 bytes at 0x10000000 (second-stage bootloader)
//! - **FLASH**: 2MB minus BOOT2 starting at 0x10000100 (program code storage)
//! - **RAM**: 264KB starting at 0x20000000 (runtime data, both core stacks)

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Main build script entry point
///
/// # Panics
/// Panics if the `OUT_DIR` environment variable is not set or `memory.x`
/// cannot be written to it.
fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
