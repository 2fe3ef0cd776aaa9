//! Command dispatch for the interactive REPL (§2b, §6).

use std::io;
use std::path::PathBuf;

use crate::driver;
use crate::input::{self, InputQueue};
use crate::macros::MacroTable;

pub struct Session {
    pub macros: MacroTable,
    pub should_quit: bool,
    pub input: InputQueue,
    cc: PathBuf,
    keep_c: bool,
}

impl Session {
    pub fn new(cc: PathBuf, keep_c: bool) -> Self {
        Self {
            macros: MacroTable::new(),
            should_quit: false,
            input: InputQueue::new(),
            cc,
            keep_c,
        }
    }

    /// Dispatch one line of interactive input. Mirrors the original
    /// `Interaction.parse_cmd`: blank lines and `#`-comments are
    /// ignored, `?` aliases `:h`, a `:`-prefixed line dispatches a
    /// command, anything else is evaluated as a term.
    pub fn run_line(&mut self, stdin: &io::Stdin, line: &str) {
        let trimmed = line.trim_start();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        if trimmed == "?" {
            self.cmd_help();
            return;
        }

        if let Some(rest) = trimmed.strip_prefix(':') {
            let (cmd, rest) = chop(rest);
            match cmd {
                "q" => self.cmd_quit(),
                "s" => self.cmd_set_macro(rest, stdin),
                "l" => self.cmd_list_macros(),
                "f" => self.cmd_forget_macro(rest),
                "o" => self.cmd_execute_file(rest),
                "h" => self.cmd_help(),
                other => eprintln!("Failed: unknown command: {other}. Try \":h\" for help"),
            }
        } else {
            self.cmd_eval_and_print_term(trimmed.to_string(), stdin);
        }
    }

    fn cmd_quit(&mut self) {
        self.should_quit = true;
    }

    fn cmd_set_macro(&mut self, rest: &str, stdin: &io::Stdin) {
        let (name, rest) = chop(rest);
        if !lambdac_core::is_var(name) {
            eprintln!("Failed: invalid name: {name}");
            return;
        }

        let rest = rest.trim_start().strip_prefix('=').unwrap_or(rest).to_string();

        match input::read_term_source(&mut self.input, stdin, rest) {
            Some(source) => match lambdac_core::parse(&source) {
                Ok(term) => self.macros.define(name.to_string(), term),
                Err(err) => eprintln!("Failed: {err}"),
            },
            None => {}
        }
    }

    fn cmd_list_macros(&self) {
        for (name, term) in self.macros.list() {
            println!("{name} = {term}");
        }
    }

    fn cmd_forget_macro(&mut self, name: &str) {
        self.macros.forget(name.trim());
    }

    fn cmd_execute_file(&mut self, path: &str) {
        match std::fs::read_to_string(path.trim()) {
            Ok(contents) => self.input.push_file(&contents),
            Err(err) => eprintln!("Failed: {err}"),
        }
    }

    fn cmd_eval_and_print_term(&mut self, first_line: String, stdin: &io::Stdin) {
        let Some(source) = input::read_term_source(&mut self.input, stdin, first_line) else {
            return;
        };

        let term = match lambdac_core::parse(&source) {
            Ok(term) => term,
            Err(err) => {
                eprintln!("Failed: {err}");
                return;
            }
        };

        println!("{term}");

        match self.eval_term(term) {
            Ok(output) => print!("{output}"),
            Err(err) => eprintln!("Failed: {err}"),
        }
    }

    fn eval_term(&self, term: lambdac_core::Term) -> Result<String, Box<dyn std::error::Error>> {
        let full_term = self.macros.build_full_term(term);
        let translated = lambdac_core::translate(&full_term)?;
        driver::compile_and_run(&translated, &self.cc, self.keep_c).map_err(Into::into)
    }

    fn cmd_help(&self) {
        println!("{}", HELP_TEXT);
    }
}

/// Split on the first run of whitespace, as `str::split_whitespace`
/// but keeping the untouched remainder instead of further tokenizing it.
fn chop(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

const HELP_TEXT: &str = r#"One-pass λ compiler

Enter a λ-calculus term to evaluate or a special command. Special commands are:
	• :h — prints this help message
	• :q — quits the program
	• :s NAME [=] λ-TERM — adds λ-TERM under name NAME to the evaluation environment. NAME must be a valid variable name
	• :f NAME — removes all λ-terms with name NAME from the evaluation environment
	• :l — prints the evaluation environment
	• :o FILENAME — reads and evaluates all lines from the file named FILENAME
	• # text... — comment until the end of the line

The supported syntax of the λ-calculus term is this EBNF grammar:
	TERM  ::=  LAM | APP
	LAM   ::=  ('λ' | '\') VAR ('.' | ':') TERM
	APP   ::=  ATOM { ATOM }
	ATOM  ::=  VAR | '(' TERM ')'
	VAR    ~   [a-z_][a-zA-Z0-9']*

Input of multiline terms is supported: pressing [ENTER] while there are unbalanced open parentheses makes the program expect the continuation of the input on the next line(s). Continuation lines are marked by a "." prompt instead of the normal ">" prompt. Pressing [ENTER] on the continuation line without any non-whitespace input immediately aborts input.

Evaluation model is call-by-value. Before evaluating the input term, it is merged with the evaluation environment and the resulting term is evaluated instead. This merge is done using the usual let=>λ conversion, i.e., let x = e1 in e2 => (λx. e2) e1. For example, the following sequence of commands:
	:s const = λk. λ_. k
	:s zero = λs. λz. z
	:s one = λs. λz. s z
	one const zero
will evaluate the term
	(λconst. (λzero. (λone. one const zero) (λs. λz. s z)) (λs. λz. z)) (λk. λ_. k)
which should result in λ_. λs. λz. z"#;
