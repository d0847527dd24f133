// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use stdcap::Channel;

/// Open one capture window, write into it, and report what was captured
#[derive(Parser, Debug)]
#[command(name = "stdcap", version)]
#[command(about = "Capture what reaches a standard stream during one window")]
pub struct Cli {
    /// Stream to capture
    #[arg(long, env = "STDCAP_CHANNEL", default_value = "stdout")]
    pub channel: Channel,

    /// Line written into the window when no command is given
    #[arg(long, default_value = "Hello, World!")]
    pub message: String,

    /// Substring the captured text must contain
    #[arg(long)]
    pub expect: Option<String>,

    /// Report format
    #[arg(long, value_enum, env = "STDCAP_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the captured text back to the stream once restored
    #[arg(long)]
    pub replay: bool,

    /// Command to run inside the window instead of writing the message
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The substring to look for. Defaults to the message when no command runs.
    pub fn expected(&self) -> Option<&str> {
        match (&self.expect, self.command.is_empty()) {
            (Some(expect), _) => Some(expect.as_str()),
            (None, true) => Some(self.message.as_str()),
            (None, false) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
