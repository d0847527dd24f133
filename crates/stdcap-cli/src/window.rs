// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the body of a single capture window.

use crate::cli::Cli;
use crate::report::Report;
use anyhow::{Context, Result};
use std::process::Command;
use stdcap::{CaptureOptions, Channel, OutputCapture};
use tracing::debug;

pub fn run(cli: &Cli) -> Result<Report> {
    let channel = cli.channel;
    let options = CaptureOptions::new(channel).with_replay(cli.replay);
    let mut capture = OutputCapture::new(options);

    capture
        .begin()
        .with_context(|| format!("failed to start capturing {channel}"))?;
    let body = if cli.command.is_empty() {
        write_message(channel, &cli.message).map(|()| None)
    } else {
        run_command(&cli.command).map(Some)
    };
    capture
        .end()
        .with_context(|| format!("failed to restore {channel}"))?;

    let exit_code = body?;
    let captured = capture.bytes();
    debug!(%channel, bytes = captured.len(), ?exit_code, "window finished");
    Ok(Report::new(channel, &captured, cli.expected(), exit_code))
}

fn write_message(channel: Channel, message: &str) -> Result<()> {
    channel
        .write_all(format!("{message}\n").as_bytes())
        .with_context(|| format!("failed to write message to {channel}"))
}

/// Run `argv` with the redirected descriptors inherited.
///
/// Returns the exit code, or -1 when the child was killed by a signal.
fn run_command(argv: &[String]) -> Result<i32> {
    let (program, args) = argv.split_first().context("empty command")?;
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    Ok(status.code().unwrap_or(-1))
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
