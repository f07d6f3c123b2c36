//! Flattening from AST to an ordered step table.
//!
//! This module walks a parsed [`Program`] in source order and emits one
//! [`Record`] per declaration, control construct and mutating operation.
//! Parents come before their children and a branch test comes before its
//! branch, so the original nesting can be read back from record order.

mod record;


pub use record::{Model, Record, StepBuilder, StepKind};

use tracing::{debug, trace};

use crate::Error;
use crate::ast::*;
use crate::render::ExpressionRenderer;

/// Flattens an already-parsed program using `renderer` for all text fields.
///
/// On error the partially built table is discarded.
pub fn analyze_program<R>(program: &Program, renderer: &R) -> Result<Model, Error>
where
    R: ExpressionRenderer + ?Sized,
{
    let flattener = Flattener::new(renderer);
    let mut steps = StepBuilder::new();

    for statement in &program.body {
        flattener.flatten_statement(statement, &mut steps)?;
    }

    let model = steps.finish();
    debug!(
        statements = program.body.len(),
        records = model.len(),
        "flattened program"
    );
    Ok(model)
}

/// Emits records for statements, rendering text through an [`ExpressionRenderer`].
pub struct Flattener<'r, R: ExpressionRenderer + ?Sized> {
    renderer: &'r R,
}

impl<'r, R: ExpressionRenderer + ?Sized> Flattener<'r, R> {
    /// Creates a flattener that renders with `renderer`.
    pub fn new(renderer: &'r R) -> Self {
        Self { renderer }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Appends the records for `stmt` and everything nested inside it.
    pub fn flatten_statement(
        &self,
        stmt: &Statement,
        steps: &mut StepBuilder,
    ) -> Result<(), Error> {
        trace!(line = stmt.line(), kind = stmt.type_name(), "dispatch");

        match stmt {
            Statement::FunctionDeclaration(func) => self.flatten_function(func, steps),
            Statement::VariableDeclaration(decl) => {
                self.flatten_variable_declaration(decl, steps);
                Ok(())
            }
            Statement::Expression(expr_stmt) => {
                self.flatten_expression_statement(expr_stmt, steps)
            }
            Statement::Return(ret) => {
                self.flatten_return(ret, steps);
                Ok(())
            }
            Statement::While(while_stmt) => self.flatten_while(while_stmt, steps),
            Statement::If(if_stmt) => self.flatten_if_chain(if_stmt, steps),
            Statement::For(for_stmt) => self.flatten_for(for_stmt, steps),
            Statement::Block(_)
            | Statement::Switch(_)
            | Statement::DoWhile(_)
            | Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Throw(_)
            | Statement::Try(_)
            | Statement::Empty(_) => Err(unsupported(stmt.type_name(), stmt.line())),
        }
    }

    /// Flattens a loop body or branch: each statement of a block, or the single statement.
    fn flatten_body(&self, body: &Body, steps: &mut StepBuilder) -> Result<(), Error> {
        match body {
            Body::Block(block) => {
                for stmt in &block.body {
                    self.flatten_statement(stmt, steps)?;
                }
                Ok(())
            }
            Body::Single(stmt) => self.flatten_statement(stmt, steps),
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn flatten_function(
        &self,
        func: &FunctionDeclaration,
        steps: &mut StepBuilder,
    ) -> Result<(), Error> {
        steps.push(Record::new(
            func.line,
            StepKind::FunctionDeclaration,
            func.id.name.as_str(),
            "",
            "",
        ));

        // Parameters are listed as declarations of their own
        for param in &func.params {
            steps.push(Record::new(
                param.line,
                StepKind::VariableDeclaration,
                param.name.as_str(),
                "",
                "",
            ));
        }

        for stmt in &func.body {
            self.flatten_statement(stmt, steps)?;
        }

        Ok(())
    }

    fn flatten_variable_declaration(&self, decl: &VariableDeclaration, steps: &mut StepBuilder) {
        for declarator in &decl.declarations {
            let value = declarator
                .init
                .as_ref()
                .map(|init| self.renderer.render_expression(init))
                .unwrap_or_default();

            steps.push(Record::new(
                declarator.id.line,
                StepKind::VariableDeclaration,
                declarator.id.name.as_str(),
                "",
                value,
            ));
        }
    }

    // ========================================================================
    // Expression Statements
    // ========================================================================

    fn flatten_expression_statement(
        &self,
        expr_stmt: &ExpressionStatement,
        steps: &mut StepBuilder,
    ) -> Result<(), Error> {
        match &expr_stmt.expression {
            Expression::Update(update) => {
                self.flatten_update(update, steps);
                Ok(())
            }
            Expression::Assignment(assign) => self.flatten_assignment(assign, steps),
            other => Err(unsupported(other.type_name(), expr_stmt.line)),
        }
    }

    /// `x++` and `++x` both become `x + 1`; `x--` and `--x` become `x - 1`.
    fn flatten_update(&self, update: &UpdateExpression, steps: &mut StepBuilder) {
        let target = self.renderer.render_expression(&update.argument);
        let value = match update.operator {
            UpdateOperator::Increment => format!("{} + 1", target),
            UpdateOperator::Decrement => format!("{} - 1", target),
        };

        steps.push(Record::new(
            update.line,
            StepKind::UpdateExpression,
            target,
            "",
            value,
        ));
    }

    /// `=` stores the right-hand side. `+=` and `-=` join the rendered target
    /// and right-hand side as text, without regrouping either.
    fn flatten_assignment(
        &self,
        assign: &AssignmentExpression,
        steps: &mut StepBuilder,
    ) -> Result<(), Error> {
        let target = self.renderer.render_expression(&assign.left);
        let value = match assign.operator {
            AssignmentOperator::Assign => self.renderer.render_expression(&assign.right),
            AssignmentOperator::AddAssign => {
                format!("{} + {}", target, self.renderer.render_expression(&assign.right))
            }
            AssignmentOperator::SubtractAssign => {
                format!("{} - {}", target, self.renderer.render_expression(&assign.right))
            }
            other => return Err(unsupported(other.as_str(), assign.line)),
        };

        steps.push(Record::new(
            assign.line,
            StepKind::AssignmentExpression,
            target,
            "",
            value,
        ));

        Ok(())
    }

    // ========================================================================
    // Control Flow
    // ========================================================================

    fn flatten_return(&self, ret: &ReturnStatement, steps: &mut StepBuilder) {
        let value = ret
            .argument
            .as_ref()
            .map(|arg| self.renderer.render_expression(arg))
            .unwrap_or_default();

        steps.push(Record::new(ret.line, StepKind::ReturnStatement, "", "", value));
    }

    fn flatten_while(
        &self,
        while_stmt: &WhileStatement,
        steps: &mut StepBuilder,
    ) -> Result<(), Error> {
        steps.push(Record::new(
            while_stmt.line,
            StepKind::WhileStatement,
            "",
            self.renderer.render_expression(&while_stmt.test),
            "",
        ));

        self.flatten_body(&while_stmt.body, steps)
    }

    /// Walks an `if` / `else if` / `else` ladder as one chain.
    fn flatten_if_chain(&self, first: &IfStatement, steps: &mut StepBuilder) -> Result<(), Error> {
        let mut current = first;
        let mut kind = StepKind::IfStatement;

        loop {
            steps.push(Record::new(
                current.line,
                kind,
                "",
                self.renderer.render_expression(&current.test),
                "",
            ));
            self.flatten_body(&current.consequent, steps)?;

            match &current.alternate {
                None => return Ok(()),
                Some(Alternate::ElseIf(next)) => {
                    current = &**next;
                    kind = StepKind::ElseIfStatement;
                }
                Some(Alternate::Else(body)) => {
                    steps.push(Record::new(body.line(), StepKind::ElseStatement, "", "", ""));
                    return self.flatten_body(body, steps);
                }
            }
        }
    }

    /// The condition is `init;test;update` with absent clauses left empty.
    fn flatten_for(&self, for_stmt: &ForStatement, steps: &mut StepBuilder) -> Result<(), Error> {
        let init = match &for_stmt.init {
            Some(ForInit::Declaration(decl)) => self.renderer.render_declaration(decl),
            Some(ForInit::Expression(expr)) => self.renderer.render_expression(expr),
            None => String::new(),
        };
        let render = |clause: &Option<Expression>| {
            clause
                .as_ref()
                .map(|expr| self.renderer.render_expression(expr))
                .unwrap_or_default()
        };
        let condition = format!(
            "{};{};{}",
            init,
            render(&for_stmt.test),
            render(&for_stmt.update)
        );

        steps.push(Record::new(for_stmt.line, StepKind::ForStatement, "", condition, ""));

        self.flatten_body(&for_stmt.body, steps)
    }
}

fn unsupported(construct: &str, line: u32) -> Error {
    Error::Unsupported {
        construct: construct.to_string(),
        line,
    }
}
