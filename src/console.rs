// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Interactive input.
//!
//! The ledger never reads stdin directly; it asks a [`Prompter`] for each
//! answer. Implementors only supply [`Prompter::line`] and
//! [`Prompter::notify`]; parsing is shared.
//!
//! - [`LinePrompter`]: `rustyline` editor used by the binary.
//! - [`ConsolePrompter`]: any `BufRead`/`Write` pair, used for scripted
//!   sessions.

use crate::SessionError;
use rust_decimal::Decimal;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Source of answers for the invoice workflow.
pub trait Prompter {
    /// Shows `prompt` and returns the next non-blank answer, trimmed.
    fn line(&mut self, prompt: &str) -> Result<String, SessionError>;

    /// Shows a message that needs no answer.
    fn notify(&mut self, message: &str) -> Result<(), SessionError>;

    /// Free text, e.g. a customer name. Never empty.
    fn text(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.line(prompt)
    }

    fn integer(&mut self, prompt: &str) -> Result<i64, SessionError> {
        ask_parsed(self, prompt)
    }

    fn decimal(&mut self, prompt: &str) -> Result<Decimal, SessionError> {
        ask_parsed(self, prompt)
    }

    /// A single-character answer such as `y`/`n`, lowercased.
    fn choice(&mut self, prompt: &str) -> Result<char, SessionError> {
        let answer = self.line(prompt)?;
        // `line` never returns an empty answer.
        let first = answer.chars().next().unwrap_or_default();
        Ok(first.to_ascii_lowercase())
    }
}

/// Asks until the answer parses. There is no range checking.
fn ask_parsed<P, T>(prompter: &mut P, prompt: &str) -> Result<T, SessionError>
where
    P: Prompter + ?Sized,
    T: FromStr,
{
    loop {
        let answer = prompter.line(prompt)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                warn!(input = %answer, "not a number, asking again");
                prompter.notify(&format!("\"{answer}\" is not a number."))?;
            }
        }
    }
}

/// Prompts on a writer and reads one answer per line from a reader.
///
/// Blank lines are skipped.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::EndOfInput);
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

/// Line-editing prompter on the terminal.
///
/// Multi-line prompts print all but their last line before the editor
/// takes over. Ctrl-D and Ctrl-C end the session.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> Result<Self, SessionError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

/// Splits a prompt into the lines printed up front and the editor's own prompt.
fn split_prompt(prompt: &str) -> (Option<&str>, &str) {
    match prompt.rsplit_once('\n') {
        Some((preamble, last)) => (Some(preamble), last),
        None => (None, prompt),
    }
}

impl Prompter for LinePrompter {
    fn line(&mut self, prompt: &str) -> Result<String, SessionError> {
        let (preamble, last) = split_prompt(prompt);
        if let Some(preamble) = preamble {
            println!("{preamble}");
        }

        loop {
            match self.editor.readline(last) {
                Ok(answer) => {
                    let answer = answer.trim();
                    if !answer.is_empty() {
                        return Ok(answer.to_string());
                    }
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                    return Err(SessionError::EndOfInput);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), SessionError> {
        println!("{message}");
        Ok(())
    }
}
