//! Text command front end.
//!
//! Maps the line-oriented command surface onto session primitives:
//!
//! | Command              | Primitive                                            |
//! |----------------------|------------------------------------------------------|
//! | `clear`              | [`DisplaySession::clear()`]                          |
//! | `text <string>`      | [`DisplaySession::draw_text()`] at `text_origin`     |
//! | `progress <percent>` | [`DisplaySession::draw_rectangle_fill()`] at `progress_origin` / `progress_size` |
//!
//! Origins and sizes come from the session's [`DisplayConfig`](crate::DisplayConfig).

use crate::error::DisplayError;
use crate::session::DisplaySession;
use crate::sink::HardwareSink;

/// A parsed display command, borrowing its text argument from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Clear the panel.
    Clear,
    /// Draw the given text at the configured text origin.
    Text(&'a str),
    /// Draw a progress bar with the given percentage (already saturated to 0–100).
    Progress(u8),
}

impl<'a> Command<'a> {
    /// Parse one command line.
    ///
    /// The `progress` argument is read like C `atoi`: leading whitespace,
    /// an optional sign, then as many digits as follow. Missing digits give
    /// 0, negative values give 0 and anything above 100 gives 100.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidParameter`] for an unknown command.
    pub fn parse(line: &'a str) -> Result<Self, DisplayError> {
        if line == "clear" {
            return Ok(Command::Clear);
        }
        if let Some(text) = line.strip_prefix("text ") {
            return Ok(Command::Text(text));
        }
        if let Some(arg) = line.strip_prefix("progress ") {
            return Ok(Command::Progress(parse_percent(arg)));
        }
        Err(DisplayError::InvalidParameter)
    }

    /// Run the command against `session`.
    pub fn apply<S>(&self, session: &mut DisplaySession<S>) -> Result<(), DisplayError>
    where
        S: HardwareSink,
    {
        match *self {
            Command::Clear => session.clear(),
            Command::Text(text) => {
                let (x, y) = session.config().text_origin;
                session.draw_text(x, y, text)
            }
            Command::Progress(percent) => {
                let (x, y) = session.config().progress_origin;
                let (w, h) = session.config().progress_size;
                session.draw_rectangle_fill(x, y, w, h, percent)
            }
        }
    }
}

/// Parse `line` and run it against `session`.
pub fn execute<S>(session: &mut DisplaySession<S>, line: &str) -> Result<(), DisplayError>
where
    S: HardwareSink,
{
    let command = Command::parse(line)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("command: {}", command);

    command.apply(session)
}

fn parse_percent(arg: &str) -> u8 {
    let arg = arg.trim_start();
    let (negative, digits) = match arg.as_bytes().first() {
        Some(b'-') => (true, &arg[1..]),
        Some(b'+') => (false, &arg[1..]),
        _ => (false, arg),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });

    if negative {
        0
    } else {
        value.min(100) as u8
    }
}
