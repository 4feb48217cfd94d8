//! Common panic/fault/timestamp handlers and result reporting for the demos

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]

use core::sync::atomic::{AtomicU32, Ordering};

use defmt_semihosting as _;

/// How many failure messages we keep for the summary
const MAX_FAILURES: usize = 16;

/// Number of checks run so far, across every [`Report`]
static CHECKS: AtomicU32 = AtomicU32::new(0);

/// Called when a panic occurs.
///
/// Logs the panic to defmt and then crashes the CPU.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    defmt::println!("PANIC: {}", defmt::Debug2Format(info));
    cortex_m::asm::udf();
}

/// Called when a HardFault occurs.
///
/// Logs the fault to defmt and then crashes the CPU.
#[cortex_m_rt::exception]
unsafe fn HardFault(info: &cortex_m_rt::ExceptionFrame) -> ! {
    defmt::println!("FAULT: {}", defmt::Debug2Format(info));
    cortex_m::asm::udf();
}

// Stamp each log line with the number of checks run so far
defmt::timestamp!("{=u32:05}", CHECKS.load(Ordering::Relaxed));

/// Collects pass/fail results for one group of checks
pub struct Report {
    suite: &'static str,
    passed: u32,
    failures: heapless::Vec<&'static str, MAX_FAILURES>,
    /// Failures that did not fit in `failures`
    dropped: u32,
}

impl Report {
    /// Start reporting on a group of checks
    pub fn new(suite: &'static str) -> Report {
        defmt::info!("Running {=str}", suite);
        Report {
            suite,
            passed: 0,
            failures: heapless::Vec::new(),
            dropped: 0,
        }
    }

    /// Record one check, printing `SUCCESS` or `FAILURE` and the message
    pub fn check(&mut self, ok: bool, msg: &'static str) {
        CHECKS.fetch_add(1, Ordering::Relaxed);
        if ok {
            defmt::println!("SUCCESS {=str}", msg);
            self.passed += 1;
        } else {
            defmt::println!("FAILURE {=str}", msg);
            if self.failures.push(msg).is_err() {
                self.dropped += 1;
            }
        }
    }

    /// Record a check that `got` equals `want`, logging both if not
    pub fn expect<T>(&mut self, got: T, want: T, msg: &'static str)
    where
        T: PartialEq + defmt::Format,
    {
        let ok = got == want;
        if !ok {
            defmt::warn!("{=str}: got {}, wanted {}", msg, got, want);
        }
        self.check(ok, msg);
    }

    /// Did every check pass?
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty() && self.dropped == 0
    }

    /// Print the summary and go to sleep
    pub fn finish(self) -> ! {
        let failed = self.failures.len() as u32 + self.dropped;
        if self.all_passed() {
            defmt::info!("{=str}: all {=u32} checks passed", self.suite, self.passed);
        } else {
            defmt::error!(
                "{=str}: {=u32} passed, {=u32} failed",
                self.suite,
                self.passed,
                failed
            );
            for msg in self.failures.iter() {
                defmt::error!("  - {=str}", *msg);
            }
            if self.dropped > 0 {
                defmt::error!("  ... and {=u32} more", self.dropped);
            }
        }
        idle()
    }
}

/// Park the CPU once there is nothing left to do
pub fn idle() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

// End of File
