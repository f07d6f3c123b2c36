// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that prints the step table of each entered program.

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Helper};
use spacey_analyzer::lexer::{Scanner, TokenKind};
use std::borrow::Cow;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, Printer};

const HISTORY_FILE: &str = ".spacey_steps_history";

/// Completion words: keywords and literals of the analyzable subset.
const WORDS: &[&str] = &[
    "const", "else", "false", "for", "function", "if", "let", "null", "return", "true", "var",
    "while",
];

/// Dot-commands understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Format,
    Load,
}

struct CommandSpec {
    names: &'static [&'static str],
    command: ReplCommand,
    usage: &'static str,
    about: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["help", "h", "?"],
        command: ReplCommand::Help,
        usage: ".help",
        about: "Show this help message",
    },
    CommandSpec {
        names: &["exit", "quit", "q"],
        command: ReplCommand::Exit,
        usage: ".exit",
        about: "Exit the REPL",
    },
    CommandSpec {
        names: &["clear", "cls"],
        command: ReplCommand::Clear,
        usage: ".clear",
        about: "Clear the screen",
    },
    CommandSpec {
        names: &["format", "f"],
        command: ReplCommand::Format,
        usage: ".format <table|json>",
        about: "Show or change the output format",
    },
    CommandSpec {
        names: &["load", "l"],
        command: ReplCommand::Load,
        usage: ".load <file>",
        about: "Analyze a JavaScript file",
    },
];

impl ReplCommand {
    /// Splits `.name [argument]` into a command and its trimmed argument.
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let name = name.to_lowercase();

        let spec = COMMANDS
            .iter()
            .find(|spec| spec.names.contains(&name.as_str()))?;
        let arg = arg.trim();
        Some((spec.command, (!arg.is_empty()).then_some(arg)))
    }
}

/// Completion, hints, highlighting and multi-line validation for the editor.
struct StepsHelper {
    candidates: Vec<String>,
    color: bool,
}

impl StepsHelper {
    fn new(color: bool) -> Self {
        let commands = COMMANDS.iter().map(|spec| format!(".{}", spec.names[0]));
        let candidates = WORDS
            .iter()
            .map(|word| word.to_string())
            .chain(commands)
            .collect();

        Self { candidates, color }
    }

    fn completions<'c>(&'c self, word: &'c str) -> impl Iterator<Item = &'c str> + 'c {
        self.candidates
            .iter()
            .map(String::as_str)
            .filter(move |candidate| candidate.len() > word.len() && candidate.starts_with(word))
    }
}

/// Start of the word ending at `end`
fn word_start(line: &str, end: usize) -> usize {
    line[..end]
        .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '.')
        .map_or(0, |i| i + 1)
}

impl Completer for StepsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, Vec::new()));
        }

        let matches = self
            .completions(word)
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for StepsHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        let rest = &self.completions(word).next()?[word.len()..];
        Some(if self.color {
            rest.dimmed().to_string()
        } else {
            rest.to_string()
        })
    }
}

impl Highlighter for StepsHelper {
    /// Colors the line token by token with the analyzer's own scanner.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.color {
            return Cow::Borrowed(line);
        }
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        let mut out = String::with_capacity(line.len() * 2);
        let mut last = 0;
        for token in Scanner::new(line) {
            let (start, end) = (token.span.start, token.span.end);
            push_gap(&mut out, &line[last..start]);
            out.push_str(&paint_token(&token.kind, &line[start..end]));
            last = end;
        }
        push_gap(&mut out, &line[last..]);

        Cow::Owned(out)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.color
    }
}

/// Whitespace passes through; anything else between tokens is a comment.
fn push_gap(out: &mut String, gap: &str) {
    if gap.trim().is_empty() {
        out.push_str(gap);
    } else {
        out.push_str(&gap.dimmed().to_string());
    }
}

fn paint_token(kind: &TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Identifier(_) | TokenKind::Semicolon | TokenKind::Comma | TokenKind::Dot => {
            text.to_string()
        }
        TokenKind::Number(_) => text.yellow().to_string(),
        TokenKind::String(_) => text.green().to_string(),
        TokenKind::True | TokenKind::False | TokenKind::Null | TokenKind::This => {
            text.blue().to_string()
        }
        TokenKind::Invalid => text.red().underline().to_string(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBracket
        | TokenKind::RightBracket
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => text.yellow().to_string(),
        _ if TokenKind::keyword(text).is_some() => text.magenta().bold().to_string(),
        _ => text.cyan().to_string(),
    }
}

impl Validator for StepsHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        if input.trim_start().starts_with('.') || !needs_more_input(input) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// True while brackets are still open or the input ends on an operator that
/// needs a right-hand side. Mismatched closers are left for the parser to report.
fn needs_more_input(input: &str) -> bool {
    let mut open = Vec::new();
    let mut last = None;

    for token in Scanner::new(input) {
        match token.kind {
            TokenKind::LeftParen => open.push(TokenKind::RightParen),
            TokenKind::LeftBracket => open.push(TokenKind::RightBracket),
            TokenKind::LeftBrace => open.push(TokenKind::RightBrace),
            TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => {
                if open.pop().as_ref() != Some(&token.kind) {
                    return false;
                }
            }
            _ => {}
        }
        last = Some(token.kind);
    }

    !open.is_empty()
        || matches!(
            last,
            Some(
                TokenKind::Comma
                    | TokenKind::Equal
                    | TokenKind::Plus
                    | TokenKind::Minus
                    | TokenKind::Star
                    | TokenKind::Slash
                    | TokenKind::Percent
                    | TokenKind::LessThan
                    | TokenKind::GreaterThan
                    | TokenKind::AmpersandAmpersand
                    | TokenKind::PipePipe
                    | TokenKind::QuestionQuestion
                    | TokenKind::Question
                    | TokenKind::PlusEqual
                    | TokenKind::MinusEqual
            )
        )
}

impl Helper for StepsHelper {}

/// The interactive REPL
pub struct Repl {
    printer: Printer,
    color: bool,
    editor: Editor<StepsHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    pub fn new(config: &Config) -> Result<Self> {
        let editor_config = rustyline::Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(editor_config)?;
        editor.set_helper(Some(StepsHelper::new(config.color)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spacey-steps")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!(path = %parent.display(), error = %e, "no history directory");
            }
        }

        // A missing history file is normal on first run
        let _ = editor.load_history(&history_path);

        Ok(Self {
            printer: Printer::new(config.format, config.color),
            color: config.color,
            editor,
            history_path,
        })
    }

    /// Reads and analyzes input until `.exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();
        let prompt = render_prompt(self.color);

        let outcome = loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if self.handle_line(line.trim()).is_break() {
                        break Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => println!("{}", "^C".dimmed()),
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break Ok(());
                }
                Err(err) => break Err(CliError::from(err)),
            }
        };

        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(path = %self.history_path.display(), error = %e, "could not save history");
        }

        println!();
        outcome
    }

    fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        if line.is_empty() {
            return ControlFlow::Continue(());
        }
        if !line.starts_with('.') {
            self.analyze_and_print(line);
            return ControlFlow::Continue(());
        }

        match ReplCommand::parse(line) {
            Some((command, arg)) => self.execute_command(command, arg),
            None => {
                eprintln!("{}: unknown command {}", "Error".red().bold(), line.cyan());
                ControlFlow::Continue(())
            }
        }
    }

    fn print_banner(&self) {
        println!();
        println!(
            "  {} {}",
            "spacey-steps".white().bold(),
            concat!("v", env!("CARGO_PKG_VERSION")).bright_yellow()
        );
        println!("  {}", "Enter a program to see its step table".dimmed());
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, command: ReplCommand, arg: Option<&str>) -> ControlFlow<()> {
        match command {
            ReplCommand::Help => print_help(),
            ReplCommand::Exit => return ControlFlow::Break(()),
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Format => match arg.map(str::parse::<OutputFormat>) {
                None => println!("{}", self.printer.format().cyan()),
                Some(Ok(format)) => self.printer.set_format(format),
                Some(Err(e)) => eprintln!("{}: {}", "Error".red().bold(), e),
            },
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} requires a file path",
                    "Error".red().bold(),
                    ".load".cyan()
                ),
            },
        }
        ControlFlow::Continue(())
    }

    fn load_file(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.analyze_and_print(&source),
            Err(e) => eprintln!(
                "{}",
                self.printer
                    .render_error(&format!("IOError: Failed to read {}: {}", path.display(), e))
            ),
        }
    }

    fn analyze_and_print(&self, source: &str) {
        let rendered = spacey_analyzer::analyze(source)
            .map_err(CliError::from)
            .and_then(|model| self.printer.render(&model));

        match rendered {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("{}", self.printer.render_error(&e)),
        }
    }
}

fn render_prompt(color: bool) -> String {
    if color {
        format!("{} ", "steps>".bright_green().bold())
    } else {
        "steps> ".to_string()
    }
}

fn print_help() {
    println!();
    println!("{}", "REPL Commands:".white().bold());
    for spec in COMMANDS {
        println!("  {:24} {}", spec.usage.cyan(), spec.about.dimmed());
    }
    println!();
    println!("{}", "Keys:".white().bold());
    println!("  {:24} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
    println!("  {:24} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
    println!("  {:24} {}", "Tab".yellow(), "Complete keywords and commands".dimmed());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(ReplCommand::parse(".help"), Some((ReplCommand::Help, None)));
        assert_eq!(ReplCommand::parse(" .Q "), Some((ReplCommand::Exit, None)));
        assert_eq!(
            ReplCommand::parse(".load test.js"),
            Some((ReplCommand::Load, Some("test.js")))
        );
        assert_eq!(
            ReplCommand::parse(".format   json "),
            Some((ReplCommand::Format, Some("json")))
        );
        assert_eq!(ReplCommand::parse(".version"), None);
        assert_eq!(ReplCommand::parse("not a command"), None);
    }

    #[test]
    fn test_needs_more_input() {
        assert!(needs_more_input("if (a) {"));
        assert!(needs_more_input("f(a, (b)"));
        assert!(needs_more_input("x = a +"));
        assert!(needs_more_input("let y ="));
        assert!(!needs_more_input("while (x < 3) { x++; }"));
        assert!(!needs_more_input("x++"));
        assert!(!needs_more_input("x = '(';"));
        assert!(!needs_more_input("a[i] = 1; // {"));
        assert!(!needs_more_input("x = ]"));
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("while (whi", 10), 7);
        assert_eq!(word_start(".for", 4), 0);
        assert_eq!(word_start("", 0), 0);
    }

    #[test]
    fn test_completions() {
        let helper = StepsHelper::new(false);
        let found: Vec<&str> = helper.completions("wh").collect();
        assert_eq!(found, vec!["while"]);
        let found: Vec<&str> = helper.completions(".f").collect();
        assert_eq!(found, vec![".format"]);
        assert_eq!(helper.completions("while").count(), 0);
    }

    #[test]
    fn test_highlight_keeps_text() {
        let helper = StepsHelper::new(true);
        let line = "while (x < 3) { y = 'a'; } // done";
        let highlighted = helper.highlight(line, 0);
        assert!(highlighted.contains('\u{1b}'));
        assert_eq!(strip_ansi(&highlighted), line);
    }

    #[test]
    fn test_highlight_disabled_without_color() {
        let helper = StepsHelper::new(false);
        assert!(matches!(helper.highlight("let x = 1;", 0), Cow::Borrowed(_)));
    }

    #[test]
    fn test_prompt_respects_color() {
        assert_eq!(render_prompt(false), "steps> ");
        assert!(render_prompt(true).contains('\u{1b}'));
        assert_eq!(strip_ansi(&render_prompt(true)), "steps> ");
    }

    #[test]
    fn test_paint_token() {
        assert_eq!(paint_token(&TokenKind::Identifier("count".into()), "count"), "count");
        assert_ne!(paint_token(&TokenKind::While, "while"), "while");
    }
}
