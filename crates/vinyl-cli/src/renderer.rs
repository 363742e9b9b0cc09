//! Terminal output for command results.
//!
//! Results are markdown rendered with termimad, printed raw with
//! `--no-color`, or serialized with serde_json under `--json`.

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;
use termimad::{MadSkin, crossterm::style::Color};

/// How results reach stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Rich,
    Plain,
    Json,
}

impl OutputMode {
    /// `--json` wins over `--no-color`.
    pub fn from_flags(no_color: bool, json: bool) -> Self {
        match (json, no_color) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Plain,
            (false, false) => OutputMode::Rich,
        }
    }
}

pub struct TerminalRenderer {
    mode: OutputMode,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(mode: OutputMode) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { mode, skin }
    }

    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Prints a result as markdown or JSON depending on the mode.
    pub fn show<T: Serialize + Display>(&self, value: &T) -> Result<()> {
        if self.is_json() {
            self.json(value)
        } else {
            self.render(&value.to_string())
        }
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        match self.mode {
            OutputMode::Rich => {
                for line in markdown.lines() {
                    // Keep the hashes visible on headers
                    if line.starts_with('#') {
                        println!("\x1b[34m{line}\x1b[0m");
                    } else {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
            OutputMode::Plain | OutputMode::Json => print!("{markdown}"),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(OutputMode::Rich)
    }
}
