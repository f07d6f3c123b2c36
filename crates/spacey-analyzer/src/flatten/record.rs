//! Step records and the model that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of construct a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// A function declaration
    FunctionDeclaration,
    /// A declared variable or function parameter
    VariableDeclaration,
    /// `x++`, `++x`, `x--`, `--x`
    UpdateExpression,
    /// `x = ...`, `x += ...`, `x -= ...`
    AssignmentExpression,
    /// A return statement
    ReturnStatement,
    /// A while loop
    WhileStatement,
    /// The first test of an if chain
    IfStatement,
    /// A later test of an if chain
    ElseIfStatement,
    /// The final `else` of an if chain
    ElseStatement,
    /// A for loop
    ForStatement,
}

impl StepKind {
    /// The name used in tables and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::FunctionDeclaration => "FunctionDeclaration",
            StepKind::VariableDeclaration => "VariableDeclaration",
            StepKind::UpdateExpression => "UpdateExpression",
            StepKind::AssignmentExpression => "AssignmentExpression",
            StepKind::ReturnStatement => "ReturnStatement",
            StepKind::WhileStatement => "WhileStatement",
            StepKind::IfStatement => "IfStatement",
            StepKind::ElseIfStatement => "ElseIfStatement",
            StepKind::ElseStatement => "ElseStatement",
            StepKind::ForStatement => "ForStatement",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the step table.
///
/// Fields that do not apply to a kind are empty strings. Records are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Line")]
    line: u32,
    #[serde(rename = "Type")]
    kind: StepKind,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Condition")]
    condition: String,
    #[serde(rename = "Value")]
    value: String,
}

impl Record {
    /// Creates a record.
    pub fn new(
        line: u32,
        kind: StepKind,
        name: impl Into<String>,
        condition: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            line,
            kind,
            name: name.into(),
            condition: condition.into(),
            value: value.into(),
        }
    }

    /// 1-based source line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// What the record describes.
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Identifier text, or empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered test expression, or empty.
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Rendered assigned, returned or incremented value, or empty.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The ordered records produced by one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    records: Vec<Record>,
}

impl Model {
    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the program produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Consumes the model, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl IntoIterator for Model {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Append-only accumulator for records.
///
/// One builder is threaded through a traversal by exclusive borrow; the
/// finished [`Model`] only exists once the traversal succeeded.
#[derive(Debug, Default)]
pub struct StepBuilder {
    records: Vec<Record>,
}

impl StepBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seals the builder into a model.
    pub fn finish(self) -> Model {
        Model {
            records: self.records,
        }
    }
}
