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

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{analyze, config::Config, engine::NumberingEngine, render::Renderer};

const TITLE: &str = "📞 PhoneXtract: Number Intelligence Tool";
const SUBTITLE: &str = "🛡️ For Educational and OSINT Purposes Only";
const FOOTER: &str = "Thank you for using PhoneXtract";
const PROCESSING: &str = "⏳ Processing...";
const CONTINUE_PROMPT: &str = "🔁 Do you want to check another number? (Y/N): ";
const RULE_WIDTH: usize = 64;

/// Interactive read-analyze-print loop.
pub struct Shell<'a, E: NumberingEngine> {
    engine: &'a E,
    config: &'a Config,
    renderer: Renderer,
}

/// Reads one line, without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl<'a, E: NumberingEngine> Shell<'a, E> {
    pub fn new(engine: &'a E, config: &'a Config, renderer: Renderer) -> Self {
        Self {
            engine,
            config,
            renderer,
        }
    }

    fn prompt(&self) -> String {
        match &self.config.default_region {
            Some(region) => format!("📲 Enter phone number (E.164 or national for {}): ", region),
            None => "📲 Enter phone number (E.164, e.g., +14155552671): ".to_owned(),
        }
    }

    fn write_rule<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.renderer.write_info(out, &"━".repeat(RULE_WIDTH))
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_rule(out)?;
        self.renderer.write_info(out, TITLE)?;
        self.renderer.write_info(out, SUBTITLE)?;
        self.write_rule(out)
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_rule(out)?;
        self.renderer.write_info(out, FOOTER)?;
        self.write_rule(out)
    }

    /// Analyzes one number and writes either the rows or a warning line.
    pub fn analyze_and_print<W: Write>(&self, raw: &str, out: &mut W) -> io::Result<()> {
        match analyze(self.engine, raw, self.config.default_region.as_ref()) {
            Ok(rows) => self.renderer.write_rows(out, &rows),
            Err(err) => {
                debug!("Analysis failed: {:?}", err);
                self.renderer.write_error(out, &err)
            }
        }
    }

    /// Runs until the user declines to continue or input ends.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            self.write_banner(out)?;
            self.renderer.write_prompt(out, &self.prompt())?;
            let Some(raw) = read_line(input)? else {
                writeln!(out)?;
                break;
            };

            self.renderer.write_info(out, PROCESSING)?;
            self.analyze_and_print(&raw, out)?;

            writeln!(out)?;
            self.renderer.write_prompt(out, CONTINUE_PROMPT)?;
            let answer = read_line(input)?;
            if !answer.as_deref().is_some_and(is_affirmative) {
                break;
            }
        }
        self.write_footer(out)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{is_affirmative, Shell};
    use crate::{config::Config, engine::PhoneNumberEngine, i18n::RegionCode, render::Renderer};

    fn run(config: &Config, input: &str) -> String {
        let engine = PhoneNumberEngine::new();
        let shell = Shell::new(&engine, config, Renderer::plain());
        let mut out = Vec::new();
        shell.run(&mut Cursor::new(input.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_number_then_quit() {
        let output = run(&Config::default(), "+14155552671\nn\n");
        assert!(output.contains("🌍 International Format: +1 415-555-2671"));
        assert!(output.contains("✔️ Valid Number: Yes"));
        assert!(output.contains("Thank you for using PhoneXtract"));
        assert_eq!(output.matches("Enter phone number").count(), 1);
    }

    #[test]
    fn test_errors_do_not_end_the_loop() {
        let output = run(&Config::default(), "\ny\n4155552671\nY\n+1abc\nno\n");
        assert!(output.contains("[!] Please enter a phone number."));
        assert!(output.contains("[!] Use E.164 with '+'"));
        assert!(output.contains("[!] Parse error: "));
        assert_eq!(output.matches("Enter phone number").count(), 3);
    }

    #[test]
    fn test_end_of_input_ends_the_loop() {
        let output = run(&Config::default(), "");
        assert!(output.contains("Thank you for using PhoneXtract"));

        let output = run(&Config::default(), "+14155552671\n");
        assert!(output.contains("Location"));
        assert!(output.contains("Thank you for using PhoneXtract"));
    }

    #[test]
    fn test_prompt_mentions_default_region() {
        let config = Config {
            default_region: Some(RegionCode::parse("US").unwrap()),
        };
        let output = run(&config, "415 555 2671\nn\n");
        assert!(output.contains("E.164 or national for US"));
        assert!(output.contains("🌎 Country Code: 1"));
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" Yes "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }
}
