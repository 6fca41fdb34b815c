//! Console output for error and anomaly lines.

use std::sync::{Arc, Mutex};

/// Destination for lines mirrored to the operator's terminal.
pub trait Console: Send + Sync + 'static {
    fn line(&self, message: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&self, message: &str) {
        println!("{message}");
    }
}

/// Keeps every line in memory; handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Console for MemoryConsole {
    fn line(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_shares_lines_between_clones() {
        let console = MemoryConsole::new();
        let writer = console.clone();
        writer.line("first");
        writer.line("second");

        assert_eq!(console.lines(), vec!["first", "second"]);
    }
}
