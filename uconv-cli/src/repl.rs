//! Prompt loop
//!
//! Prompt, read a line, stop on the exit keyword or end of input, otherwise
//! print the converter's answer and prompt again.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::ReplConfig;

/// Counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines handed to the converter
    pub conversions: usize,
    /// Whether the session ended on the exit keyword rather than end of input
    pub exited: bool,
}

/// Run the loop until the exit keyword or end of input
pub fn run<R, W>(mut reader: R, mut writer: W, config: &ReplConfig) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    loop {
        write!(writer, "{}", config.prompt)?;
        writer.flush()?;

        let mut raw = Vec::new();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            break;
        }

        // Undecodable bytes become U+FFFD; such a line simply fails to parse
        let line = String::from_utf8_lossy(&raw);
        let line = strip_line_terminator(&line);
        if line == config.exit_keyword {
            summary.exited = true;
            break;
        }

        let answer = uconv::convert(line);
        writeln!(writer, "{}", answer)?;
        writer.flush()?;
        summary.conversions += 1;
    }

    info!(conversions = summary.conversions, exited = summary.exited, "session finished");
    Ok(summary)
}

/// Remove a trailing "\n" or "\r\n", nothing else
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
