// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! What a capture window produced, and how it is printed.

use crate::cli::OutputFormat;
use serde::Serialize;
use stdcap::Channel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub channel: String,
    /// Raw byte count, before lossy UTF-8 decoding
    pub bytes: usize,
    pub text: String,
    pub expected: Option<String>,
    pub matched: bool,
    /// Exit code of the command run inside the window, if any
    pub exit_code: Option<i32>,
}

impl Report {
    pub fn new(
        channel: Channel,
        captured: &[u8],
        expected: Option<&str>,
        exit_code: Option<i32>,
    ) -> Self {
        let text = String::from_utf8_lossy(captured).into_owned();
        let matched = expected.is_none_or(|needle| text.contains(needle));
        Self {
            channel: channel.to_string(),
            bytes: captured.len(),
            text,
            expected: expected.map(str::to_string),
            matched,
            exit_code,
        }
    }

    /// The expectation held and the command, if any, succeeded.
    pub fn passed(&self) -> bool {
        self.matched && self.exit_code.is_none_or(|code| code == 0)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_text(&self) -> String {
        let mut out = self.text.clone();
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        if self.expected.is_some() {
            out.push_str(if self.matched {
                "matched: yes\n"
            } else {
                "matched: no\n"
            });
        }
        out
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
