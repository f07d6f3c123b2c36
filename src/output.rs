//! Rendering of step tables and errors for the terminal.

use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};
use spacey_analyzer::{Model, StepKind};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

const HEADERS: [&str; 5] = ["Line", "Type", "Name", "Condition", "Value"];

/// How a model is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// A JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}', expected table or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Formats models and errors according to the active settings.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    color: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Renders a model in the active format.
    pub fn render(&self, model: &Model) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.render_table(model)),
            OutputFormat::Json => Ok(serde_json::to_string(model)?),
        }
    }

    /// Renders the table with every column padded to its widest cell.
    pub fn render_table(&self, model: &Model) -> String {
        if model.is_empty() {
            return self.paint("(no steps)", Style::new().dimmed());
        }

        let rows: Vec<[String; 5]> = model
            .iter()
            .map(|r| {
                [
                    r.line().to_string(),
                    r.kind().to_string(),
                    r.name().to_string(),
                    r.condition().to_string(),
                    r.value().to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| self.paint(&pad(h, w), Style::new().white().bold()))
            .collect();
        push_line(&mut out, &header);

        let rule: Vec<String> = widths
            .iter()
            .map(|w| self.paint(&"-".repeat(*w), Style::new().dimmed()))
            .collect();
        push_line(&mut out, &rule);

        for (record, row) in model.iter().zip(&rows) {
            let kind_style = kind_style(record.kind());
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = pad(cell, w);
                    match i {
                        0 => self.paint(&padded, Style::new().yellow()),
                        1 => self.paint(&padded, kind_style),
                        3 => self.paint(&padded, Style::new().cyan()),
                        4 => self.paint(&padded, Style::new().green()),
                        _ => padded,
                    }
                })
                .collect();
            push_line(&mut out, &cells);
        }

        out.truncate(out.trim_end().len());
        out
    }

    /// Renders an error as `Kind: message` with the kind highlighted.
    pub fn render_error(&self, error: &impl fmt::Display) -> String {
        let text = error.to_string();
        match text.split_once(':') {
            Some((kind, message)) => {
                format!("{}:{}", self.paint(kind, Style::new().red().bold()), message)
            }
            None => self.paint(&text, Style::new().red()),
        }
    }

    /// Renders a per-file header for multi-file output.
    pub fn render_header(&self, title: &str) -> String {
        self.paint(&format!("==> {} <==", title), Style::new().bright_cyan().bold())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

fn kind_style(kind: StepKind) -> Style {
    match kind {
        StepKind::FunctionDeclaration => Style::new().magenta().bold(),
        StepKind::VariableDeclaration => Style::new().blue(),
        StepKind::IfStatement | StepKind::ElseIfStatement | StepKind::ElseStatement => {
            Style::new().bright_magenta()
        }
        StepKind::WhileStatement | StepKind::ForStatement => Style::new().bright_yellow(),
        StepKind::ReturnStatement => Style::new().red(),
        StepKind::AssignmentExpression | StepKind::UpdateExpression => Style::new(),
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}
