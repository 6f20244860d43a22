// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for replay files: arbitrary input must produce an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexwatch::{replay, Engine};

fuzz_target!(|data: &[u8]| {
    let mut engine = Engine::new();
    let _ = replay(&mut engine, data);
});
