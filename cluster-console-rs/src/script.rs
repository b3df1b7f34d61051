//! Line-by-line command runner.

use std::io::{self, BufRead};

use cluster_display_rs::{command, status_str, DisplaySession, HardwareSink};
use log::{debug, warn};

/// Outcome counts for one script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

/// Run every command line from `reader` against `display`.
///
/// Blank lines and lines starting with `#` are skipped. A failing command
/// is logged and counted; the run continues with the next line.
pub fn run_script<S, R>(display: &mut DisplaySession<S>, reader: R) -> io::Result<Summary>
where
    S: HardwareSink,
    R: BufRead,
{
    let mut summary = Summary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = command::execute(display, &line);
        summary.executed += 1;

        match result {
            Ok(()) => debug!("line {}: `{}` -> {}", idx + 1, line, status_str(&result)),
            Err(e) => {
                summary.failed += 1;
                warn!("line {}: `{}` -> {}", idx + 1, line, e);
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use cluster_display_rs::{Color, DisplayConfig, NullSink};

    fn ready_display() -> DisplaySession<NullSink> {
        let mut display = DisplaySession::new(NullSink, DisplayConfig::default());
        display.init().unwrap();
        display
    }

    #[test]
    fn runs_commands_and_skips_comments() {
        let mut display = ready_display();
        let script = "# warm-up\n\nprogress 50\ntext A\n";
        let summary = run_script(&mut display, Cursor::new(script)).unwrap();

        assert_eq!(summary, Summary { executed: 2, failed: 0 });
        assert_eq!(display.pixel(10, 10), Some(Color::PROGRESS_FILLED));
        assert_eq!(display.pixel(0, 0), Some(Color::GLYPH_ODD));
    }

    #[test]
    fn counts_failures_and_keeps_going() {
        let mut display = ready_display();
        let script = "bogus\nprogress 100\nclear \n";
        let summary = run_script(&mut display, Cursor::new(script)).unwrap();

        assert_eq!(summary, Summary { executed: 3, failed: 2 });
        assert_eq!(display.pixel(10, 10), Some(Color::PROGRESS_FILLED));
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let mut display = ready_display();
        let summary = run_script(&mut display, Cursor::new("progress 10\r\nclear\r\n")).unwrap();
        assert_eq!(summary.failed, 0);
        assert_eq!(display.pixel(10, 10), Some(Color::ZERO));
    }

    #[test]
    fn uninitialized_display_fails_every_command() {
        let mut display = DisplaySession::new(NullSink, DisplayConfig::default());
        let summary = run_script(&mut display, Cursor::new("clear\ntext HI\n")).unwrap();
        assert_eq!(summary, Summary { executed: 2, failed: 2 });
    }
}
