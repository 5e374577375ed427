use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Screen effects the game needs around its plain text output
pub trait Terminal {
    fn clear_screen(&mut self, out: &mut dyn Write) -> io::Result<()>;

    fn pause(&mut self, duration: Duration);
}

/// Clears through crossterm and sleeps the current thread
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl Terminal for ConsoleTerminal {
    fn clear_screen(&mut self, mut out: &mut dyn Write) -> io::Result<()> {
        execute!(&mut out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Records requested effects without performing them
#[derive(Debug, Default)]
pub struct SilentTerminal {
    pub clears: usize,
    pub paused: Duration,
}

impl Terminal for SilentTerminal {
    fn clear_screen(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.paused += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_terminal_clears_and_homes_cursor() {
        let mut out: Vec<u8> = Vec::new();
        let result = ConsoleTerminal.clear_screen(&mut out);
        assert!(result.is_ok());

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[2J"), "unexpected output: {:?}", written);
        assert!(written.contains("\x1b[1;1H"), "unexpected output: {:?}", written);
    }

    #[test]
    fn test_silent_terminal_records_effects() {
        let mut terminal = SilentTerminal::default();
        let mut out: Vec<u8> = Vec::new();
        assert!(terminal.clear_screen(&mut out).is_ok());
        terminal.pause(Duration::from_millis(5));
        terminal.pause(Duration::from_millis(5));

        assert!(out.is_empty());
        assert_eq!(terminal.clears, 1);
        assert_eq!(terminal.paused, Duration::from_millis(10));
    }
}
