// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Style};

use crate::presenter::{AttributeRow, Emphasis};

const DIVIDER_WIDTH: usize = 48;
const HEADING: &str = "[+] Phone Number Analysis";
const WARNING_MARKER: &str = "[!]";

/// Writes rows and messages to a terminal, colored or plain.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }

    fn emphasis_style(emphasis: Emphasis) -> Style {
        let style = Style::new();
        match emphasis {
            Emphasis::Blue => style.blue(),
            Emphasis::Red => style.red(),
            Emphasis::Cyan => style.cyan(),
            Emphasis::Magenta => style.magenta(),
            Emphasis::Green => style.green(),
            Emphasis::Yellow => style.yellow(),
        }
    }

    fn divider(&self) -> String {
        self.paint(&"-".repeat(DIVIDER_WIDTH), Style::new().green())
    }

    pub fn row(&self, row: &AttributeRow) -> String {
        let style = Self::emphasis_style(row.emphasis);
        let label = self.paint(row.label, style.bold());
        format!("{} {}{} {}", self.paint(row.icon, style), label, self.paint(":", style), row.value)
    }

    /// Heading, rows, and a divider wherever the row group changes.
    pub fn write_rows<W: Write>(&self, out: &mut W, rows: &[AttributeRow]) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(HEADING, Style::new().yellow().bold()))?;
        writeln!(out, "{}", self.divider())?;
        let mut previous = None;
        for row in rows {
            if previous.is_some_and(|group| group != row.group) {
                writeln!(out, "{}", self.divider())?;
            }
            writeln!(out, "{}", self.row(row))?;
            previous = Some(row.group);
        }
        writeln!(out, "{}", self.divider())
    }

    pub fn write_error<W: Write>(&self, out: &mut W, message: &dyn std::fmt::Display) -> io::Result<()> {
        let line = format!("{} {}", WARNING_MARKER, message);
        writeln!(out, "{}", self.paint(&line, Style::new().red()))
    }

    pub fn write_info<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.paint(message, Style::new().cyan()))
    }

    /// Writes `prompt` without a trailing newline and flushes.
    pub fn write_prompt<W: Write>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        write!(out, "{}", self.paint(prompt, Style::new().cyan()))?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::{
        errors::AnalysisError,
        normalizer::normalize_and_parse,
        presenter::present,
        tests::fake_engine::FakeEngine,
    };

    #[test]
    fn test_plain_rows() {
        let engine = FakeEngine::default();
        let parsed = normalize_and_parse(&engine, "+14155552671", None).unwrap();
        let rows = present(&engine, &parsed);

        let mut out = Vec::new();
        Renderer::plain().write_rows(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "[+] Phone Number Analysis");
        assert_eq!(lines[2], "-".repeat(48));
        assert_eq!(lines[3], "📍 Location: California");
        assert_eq!(lines[15], "-".repeat(48));
        assert_eq!(lines[16], "💳 SIM Type: Not available (carrier-specific)");
        assert_eq!(lines.last().copied(), Some("-".repeat(48).as_str()));
        assert_eq!(lines.len(), 1 + 1 + 1 + 12 + 1 + 5 + 1);
    }

    #[test]
    fn test_error_line() {
        let mut out = Vec::new();
        Renderer::plain()
            .write_error(&mut out, &AnalysisError::EmptyInput)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[!] Please enter a phone number.\n");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let engine = FakeEngine::default();
        let parsed = normalize_and_parse(&engine, "+14155552671", None).unwrap();
        let rows = present(&engine, &parsed);
        let line = Renderer::new(true).row(&rows[0]);
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("Location"));
        assert!(line.ends_with(" California"));
    }
}
