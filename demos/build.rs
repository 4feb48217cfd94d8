//! Build Script for the basino demos
//!
//! Not required when using basino as a library

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: CC0-1.0

use std::{env, error::Error, fs, path::PathBuf};

/// The QEMU board's memory map, for `cortex-m-rt`'s `link.x`
const MEMORY_X: &[u8] = include_bytes!("memory.x");

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    // link.x does INCLUDE memory.x, and only searches the link path
    fs::write(out_dir.join("memory.x"), MEMORY_X)?;
    println!("cargo::rustc-link-search={}", out_dir.display());
    println!("cargo::rerun-if-changed=memory.x");
    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}

// End of File
