//! Multi-line continuation reader for interactive term input (§6).
//!
//! Kept at the REPL layer rather than threaded through
//! `lambdac_core::lexer`/`Cursor`, so the core crate's parser stays a
//! clean single-shot `&str -> Term` function with no IO dependency.

use std::collections::VecDeque;
use std::io::{self, Write};

/// Lines queued by `:o FILENAME`, consumed ahead of further stdin
/// input.
#[derive(Default)]
pub struct InputQueue {
    queued: VecDeque<String>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every line of `contents` to be read before stdin resumes.
    pub fn push_file(&mut self, contents: &str) {
        for line in contents.lines() {
            self.queued.push_back(line.to_string());
        }
    }

    /// Pop a queued line without touching stdin, for callers that
    /// drive their own read loop and only want to know whether a
    /// `:o`'d file still has lines pending.
    pub fn pop_immediate(&mut self) -> Option<String> {
        self.queued.pop_front()
    }

    /// Read one line, either from the queue or from `stdin`, printing
    /// `prompt` only when falling back to an interactive read.
    ///
    /// Returns `None` on end-of-file.
    fn next_line(&mut self, stdin: &io::Stdin, prompt: &str) -> Option<String> {
        if let Some(line) = self.queued.pop_front() {
            return Some(line);
        }

        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut buf = String::new();
        match stdin.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Some(buf)
            }
            Err(_) => None,
        }
    }
}

fn open_paren_balance(s: &str) -> i64 {
    s.chars().fold(0i64, |balance, ch| match ch {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}

/// Assemble a full term's source text starting from `first_line`,
/// prompting for continuation lines while parentheses are unbalanced.
/// An empty continuation line, or end-of-file, aborts the read.
pub fn read_term_source(
    queue: &mut InputQueue,
    stdin: &io::Stdin,
    first_line: String,
) -> Option<String> {
    let mut buffer = first_line;

    while open_paren_balance(&buffer) > 0 {
        match queue.next_line(stdin, ". ") {
            Some(line) if !line.trim().is_empty() => {
                buffer.push('\n');
                buffer.push_str(&line);
            }
            _ => return None,
        }
    }

    Some(buffer)
}
