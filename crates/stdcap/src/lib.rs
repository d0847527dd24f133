// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped capture of process-wide standard output.
//!
//! An [`OutputCapture`] swaps the file descriptor behind stdout (or stderr)
//! for an anonymous temporary file, and puts the original descriptor back
//! when the window closes. Because the swap happens at the descriptor level,
//! everything that writes to the stream is captured: `std::io::stdout()`,
//! C stdio, and child processes that inherit the descriptor.
//!
//! ```no_run
//! use std::io::Write;
//!
//! let mut capture = stdcap::OutputCapture::stdout();
//! capture.begin()?;
//! writeln!(std::io::stdout(), "Hello, World!").ok();
//! capture.end()?;
//! assert!(capture.text().contains("Hello, World!"));
//! # Ok::<(), stdcap::CaptureError>(())
//! ```
//!
//! Under the Rust test harness, `print!` and `println!` are intercepted by
//! the harness before they reach the descriptor. Write through
//! `std::io::stdout()` when the text has to land in a capture.

mod capture;
mod channel;
mod error;
mod options;
mod redirect;

pub use capture::{capture_stdout, with_capture, CaptureState, OutputCapture};
pub use channel::{Channel, ParseChannelError};
pub use error::CaptureError;
pub use options::CaptureOptions;
pub use redirect::is_redirected;

#[cfg(test)]
mod test_support;
