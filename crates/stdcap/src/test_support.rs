// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serializes unit tests that swap the process-wide stream descriptors.

use parking_lot::{Mutex, MutexGuard};

static STREAMS: Mutex<()> = parking_lot::const_mutex(());

pub(crate) fn lock_streams() -> MutexGuard<'static, ()> {
    STREAMS.lock()
}
