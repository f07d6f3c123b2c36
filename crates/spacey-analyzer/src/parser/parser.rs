//! The recursive descent parser.

use crate::Error;
use crate::ast::*;
use crate::lexer::{Scanner, Span, Token, TokenKind};
use crate::render::Precedence;

/// A recursive descent parser over a [`Scanner`].
///
/// Keeps one token of lookahead plus the token just consumed, which is all
/// automatic semicolon insertion needs.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    previous: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`, primed with its first token.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        Self {
            scanner,
            current,
            previous: Token::new(TokenKind::Eof, Span::new(0, 0, 1)),
        }
    }

    /// Parses the whole source.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let body = self.parse_statements(&TokenKind::Eof)?;
        Ok(Program { body })
    }

    /// Parses a single statement.
    pub fn parse_statement(&mut self) -> Result<Statement, Error> {
        let statement = match &self.current.kind {
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                let declaration = self.parse_variable_list()?;
                self.consume_semicolon()?;
                Statement::VariableDeclaration(declaration)
            }
            TokenKind::Function => self.parse_function_declaration()?,
            TokenKind::If => Statement::If(self.parse_if_statement()?),
            TokenKind::Switch => self.parse_switch_statement()?,
            TokenKind::While => self.parse_while_statement()?,
            TokenKind::Do => self.parse_do_while_statement()?,
            TokenKind::For => self.parse_for_statement()?,
            TokenKind::Return => self.parse_return_statement()?,
            TokenKind::Break => Statement::Break(self.parse_jump()?),
            TokenKind::Continue => Statement::Continue(self.parse_jump()?),
            TokenKind::Throw => self.parse_throw_statement()?,
            TokenKind::Try => self.parse_try_statement()?,
            TokenKind::LeftBrace => Statement::Block(self.parse_block()?),
            TokenKind::Semicolon => Statement::Empty(EmptyStatement {
                line: self.keyword(),
            }),
            _ => self.parse_expression_statement()?,
        };
        Ok(statement)
    }

    /// Statements up to, but not including, `end`.
    fn parse_statements(&mut self, end: &TokenKind) -> Result<Vec<Statement>, Error> {
        let mut statements = Vec::new();
        while !self.check(end) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// `break` or `continue`, with an optional label on the same line.
    fn parse_jump(&mut self) -> Result<JumpStatement, Error> {
        let line = self.keyword();

        let label = if matches!(self.current.kind, TokenKind::Identifier(_))
            && self.current.line() == line
        {
            Some(self.expect_identifier()?)
        } else {
            None
        };

        self.consume_semicolon()?;
        Ok(JumpStatement { label, line })
    }

    /// Parses `var`/`let`/`const` and its declarators, without the trailing `;`.
    fn parse_variable_list(&mut self) -> Result<VariableDeclaration, Error> {
        let line = self.current.line();
        let kind = match &self.current.kind {
            TokenKind::Var => VariableKind::Var,
            TokenKind::Let => VariableKind::Let,
            TokenKind::Const => VariableKind::Const,
            _ => return Err(self.error("Expected variable keyword")),
        };
        self.advance();

        let mut declarations = Vec::new();
        loop {
            let id = self.expect_identifier()?;
            let init = if self.eat(&TokenKind::Equal) {
                Some(self.parse_assignment()?)
            } else if kind == VariableKind::Const
                && !self.check(&TokenKind::In)
                && !self.check_identifier("of")
            {
                return Err(self.error("Missing initializer in const declaration"));
            } else {
                None
            };

            declarations.push(VariableDeclarator { id, init });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        Ok(VariableDeclaration {
            kind,
            declarations,
            line,
        })
    }

    fn parse_function_declaration(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        let id = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let params = self.parse_list(&TokenKind::RightParen, Self::expect_identifier)?;

        self.expect(&TokenKind::LeftBrace)?;
        let body = self.parse_statements(&TokenKind::RightBrace)?;
        self.expect(&TokenKind::RightBrace)?;

        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            id,
            params,
            body,
            line,
        }))
    }

    /// Parses an `if` and its whole `else if` ladder without recursing per rung.
    fn parse_if_statement(&mut self) -> Result<IfStatement, Error> {
        let first = self.parse_if_clause()?;
        let mut rest = Vec::new();
        let mut alternate = None;

        while self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                rest.push(self.parse_if_clause()?);
            } else {
                alternate = Some(Alternate::Else(self.parse_body()?));
                break;
            }
        }

        // Link the rungs back to front
        for (line, test, consequent) in rest.into_iter().rev() {
            alternate = Some(Alternate::ElseIf(Box::new(IfStatement {
                test,
                consequent,
                alternate,
                line,
            })));
        }

        let (line, test, consequent) = first;
        Ok(IfStatement {
            test,
            consequent,
            alternate,
            line,
        })
    }

    /// `if (test) body`, without any `else`.
    fn parse_if_clause(&mut self) -> Result<(u32, Expression, Body), Error> {
        let line = self.keyword();
        let test = self.parse_parenthesized()?;
        let consequent = self.parse_body()?;
        Ok((line, test, consequent))
    }

    fn parse_body(&mut self) -> Result<Body, Error> {
        Ok(Body::from_statement(self.parse_statement()?))
    }

    fn parse_switch_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        let discriminant = self.parse_parenthesized()?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut cases = Vec::new();
        while !self.eat(&TokenKind::RightBrace) {
            let test = if self.eat(&TokenKind::Case) {
                Some(self.parse_expression()?)
            } else if self.eat(&TokenKind::Default) {
                None
            } else {
                return Err(self.unexpected());
            };
            self.expect(&TokenKind::Colon)?;

            let mut consequent = Vec::new();
            while !matches!(
                self.current.kind,
                TokenKind::Case | TokenKind::Default | TokenKind::RightBrace | TokenKind::Eof
            ) {
                consequent.push(self.parse_statement()?);
            }

            cases.push(SwitchCase { test, consequent });
        }

        Ok(Statement::Switch(SwitchStatement {
            discriminant,
            cases,
            line,
        }))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        let test = self.parse_parenthesized()?;
        let body = self.parse_body()?;

        Ok(Statement::While(WhileStatement { test, body, line }))
    }

    fn parse_do_while_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        let body = self.parse_body()?;
        self.expect(&TokenKind::While)?;
        let test = self.parse_parenthesized()?;

        // The `;` after `do ... while (...)` is always optional
        self.eat(&TokenKind::Semicolon);

        Ok(Statement::DoWhile(DoWhileStatement { body, test, line }))
    }

    fn parse_for_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        self.expect(&TokenKind::LeftParen)?;

        let init = match &self.current.kind {
            TokenKind::Semicolon => None,
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                Some(ForInit::Declaration(self.parse_variable_list()?))
            }
            _ => Some(ForInit::Expression(self.parse_expression()?)),
        };

        // `for (k in o)` with a bare target parses as one `in` expression
        let expression_for_in = matches!(
            &init,
            Some(ForInit::Expression(Expression::Binary(b))) if b.operator == BinaryOperator::In
        ) && self.check(&TokenKind::RightParen);
        let construct = if expression_for_in || self.check(&TokenKind::In) {
            Some("ForInStatement")
        } else if self.check_identifier("of") {
            Some("ForOfStatement")
        } else {
            None
        };
        if let Some(construct) = construct {
            return Err(Error::Unsupported {
                construct: construct.into(),
                line,
            });
        }

        self.expect(&TokenKind::Semicolon)?;
        let test = self.parse_for_clause(&TokenKind::Semicolon)?;
        let update = self.parse_for_clause(&TokenKind::RightParen)?;
        let body = self.parse_body()?;

        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body,
            line,
        }))
    }

    /// An optional `for` clause, consuming the token that ends it.
    fn parse_for_clause(&mut self, end: &TokenKind) -> Result<Option<Expression>, Error> {
        let clause = if self.check(end) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(end)?;
        Ok(clause)
    }

    fn parse_throw_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        if self.current.line() != line {
            return Err(self.error("Illegal newline after throw"));
        }
        let argument = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::Throw(ThrowStatement { argument, line }))
    }

    fn parse_try_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();
        let block = self.parse_block()?;

        let handler = if self.eat(&TokenKind::Catch) {
            let param = if self.eat(&TokenKind::LeftParen) {
                let id = self.expect_identifier()?;
                self.expect(&TokenKind::RightParen)?;
                Some(id)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause { param, body })
        } else {
            None
        };

        let finalizer = if self.eat(&TokenKind::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.error("Missing catch or finally after try"));
        }

        Ok(Statement::Try(TryStatement {
            block,
            handler,
            finalizer,
            line,
        }))
    }

    fn parse_block(&mut self) -> Result<BlockStatement, Error> {
        let line = self.current.line();
        self.expect(&TokenKind::LeftBrace)?;
        let body = self.parse_statements(&TokenKind::RightBrace)?;
        self.expect(&TokenKind::RightBrace)?;

        Ok(BlockStatement { body, line })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, Error> {
        let line = self.keyword();

        // `return` followed by a line break returns nothing
        let argument = if matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Eof
        ) || self.current.line() != line
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_semicolon()?;

        Ok(Statement::Return(ReturnStatement { argument, line }))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, Error> {
        let line = self.current.line();
        if matches!(self.current.kind, TokenKind::Identifier(_)) {
            // Labels are the only place an identifier is directly followed by ':'
            let mut lookahead = self.scanner.clone();
            if lookahead.next_token().kind == TokenKind::Colon {
                return Err(self.unsupported("LabeledStatement"));
            }
        }

        let expression = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement { expression, line }))
    }

    /// Parses an expression, including comma sequences.
    pub fn parse_expression(&mut self) -> Result<Expression, Error> {
        let first = self.parse_assignment()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }

        let mut expressions = vec![first];
        while self.eat(&TokenKind::Comma) {
            expressions.push(self.parse_assignment()?);
        }

        Ok(Expression::Sequence(SequenceExpression { expressions }))
    }

    fn parse_assignment(&mut self) -> Result<Expression, Error> {
        let line = self.current.line();
        let target = self.parse_conditional()?;

        let Some(operator) = assignment_operator(&self.current.kind) else {
            return Ok(target);
        };

        if !matches!(target, Expression::Identifier(_) | Expression::Member(_)) {
            return Err(self.error("Invalid left-hand side in assignment"));
        }

        self.advance();
        let value = self.parse_assignment()?;

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(target),
            right: Box::new(value),
            line,
        }))
    }

    /// `test ? consequent : alternate`
    fn parse_conditional(&mut self) -> Result<Expression, Error> {
        let test = self.parse_binary(Precedence::Conditional)?;
        if !self.eat(&TokenKind::Question) {
            return Ok(test);
        }

        let consequent = self.parse_assignment()?;
        self.expect(&TokenKind::Colon)?;
        let alternate = self.parse_assignment()?;

        Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }))
    }

    /// Binary operators looser than `**`, by precedence climbing. Only
    /// operators binding tighter than `floor` are taken; equal levels fold
    /// to the left.
    fn parse_binary(&mut self, floor: Precedence) -> Result<Expression, Error> {
        let mut left = self.parse_exponent()?;

        while let Some(operator) = binary_operator(&self.current.kind) {
            let level = Precedence::of_binary(operator);
            if level <= floor {
                break;
            }
            self.advance();
            let right = self.parse_binary(level)?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    /// `**` is right-associative and binds tighter than `*`.
    fn parse_exponent(&mut self) -> Result<Expression, Error> {
        let unary_base = unary_operator(&self.current.kind).is_some();
        let base = self.parse_unary()?;

        if !self.check(&TokenKind::StarStar) {
            return Ok(base);
        }
        if unary_base {
            return Err(self.error(
                "Unary operator used immediately before exponentiation expression",
            ));
        }

        self.advance();
        let exponent = self.parse_exponent()?;
        Ok(binary(BinaryOperator::Exponent, base, exponent))
    }

    fn parse_unary(&mut self) -> Result<Expression, Error> {
        let line = self.current.line();

        if let Some(operator) = update_operator(&self.current.kind) {
            self.advance();
            let argument = self.parse_unary()?;
            self.check_update_target(&argument)?;
            return Ok(Expression::Update(UpdateExpression {
                operator,
                argument: Box::new(argument),
                prefix: true,
                line,
            }));
        }

        if let Some(operator) = unary_operator(&self.current.kind) {
            self.advance();
            let argument = self.parse_unary()?;
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                argument: Box::new(argument),
            }));
        }

        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expression, Error> {
        let line = self.current.line();
        let expr = self.parse_call()?;

        // A line break before `++`/`--` ends the statement instead
        let same_line = self.current.line() == self.previous.line();
        let Some(operator) = update_operator(&self.current.kind).filter(|_| same_line) else {
            return Ok(expr);
        };

        self.check_update_target(&expr)?;
        self.advance();

        Ok(Expression::Update(UpdateExpression {
            operator,
            argument: Box::new(expr),
            prefix: false,
            line,
        }))
    }

    fn parse_call(&mut self) -> Result<Expression, Error> {
        let mut expr = if self.check(&TokenKind::New) {
            self.parse_new_expression()?
        } else {
            self.parse_primary()?
        };

        loop {
            if self.eat(&TokenKind::LeftParen) {
                let arguments = self.parse_list(&TokenKind::RightParen, Self::parse_assignment)?;
                expr = Expression::Call(CallExpression {
                    callee: Box::new(expr),
                    arguments,
                });
            } else if self.at_member_access() {
                expr = self.parse_member_access(expr)?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn at_member_access(&self) -> bool {
        self.check(&TokenKind::Dot) || self.check(&TokenKind::LeftBracket)
    }

    /// Parses one `.name` or `[expr]` suffix.
    fn parse_member_access(&mut self, object: Expression) -> Result<Expression, Error> {
        let property = if self.eat(&TokenKind::Dot) {
            MemberProperty::Identifier(self.expect_identifier()?)
        } else {
            self.expect(&TokenKind::LeftBracket)?;
            let property = self.parse_expression()?;
            self.expect(&TokenKind::RightBracket)?;
            MemberProperty::Computed(Box::new(property))
        };

        Ok(Expression::Member(MemberExpression {
            object: Box::new(object),
            property,
        }))
    }

    fn parse_primary(&mut self) -> Result<Expression, Error> {
        if let Some(literal) = literal(&self.current.kind) {
            self.advance();
            return Ok(Expression::Literal(literal));
        }

        match &self.current.kind {
            TokenKind::Identifier(_) => Ok(Expression::Identifier(self.expect_identifier()?)),
            TokenKind::This => {
                self.advance();
                Ok(Expression::This)
            }
            TokenKind::LeftParen => self.parse_parenthesized(),
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::LeftBrace => self.parse_object_literal(),
            TokenKind::Function => Err(self.unsupported("FunctionExpression")),
            TokenKind::Class => Err(self.unsupported("ClassExpression")),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_new_expression(&mut self) -> Result<Expression, Error> {
        self.advance(); // consume 'new'

        let mut callee = if self.check(&TokenKind::New) {
            self.parse_new_expression()?
        } else {
            self.parse_primary()?
        };

        // The callee stops at the first argument list
        while self.at_member_access() {
            callee = self.parse_member_access(callee)?;
        }

        let arguments = if self.eat(&TokenKind::LeftParen) {
            self.parse_list(&TokenKind::RightParen, Self::parse_assignment)?
        } else {
            Vec::new()
        };

        Ok(Expression::New(NewExpression {
            callee: Box::new(callee),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Result<Expression, Error> {
        self.advance(); // consume '['
        let mut elements = Vec::new();

        while !self.eat(&TokenKind::RightBracket) {
            if self.eat(&TokenKind::Comma) {
                elements.push(None);
                continue;
            }
            elements.push(Some(self.parse_assignment()?));
            if !self.check(&TokenKind::RightBracket) {
                self.expect(&TokenKind::Comma)?;
            }
        }

        Ok(Expression::Array(ArrayExpression { elements }))
    }

    fn parse_object_literal(&mut self) -> Result<Expression, Error> {
        self.advance(); // consume '{'
        let mut properties = Vec::new();

        while !self.eat(&TokenKind::RightBrace) {
            let key = match literal(&self.current.kind) {
                Some(key @ (Literal::String(_) | Literal::Number(_))) => {
                    self.advance();
                    PropertyKey::Literal(key)
                }
                _ => PropertyKey::Identifier(self.expect_identifier()?),
            };
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_assignment()?;
            properties.push(Property { key, value });

            if !self.check(&TokenKind::RightBrace) {
                self.expect(&TokenKind::Comma)?;
            }
        }

        Ok(Expression::Object(ObjectExpression { properties }))
    }

    /// `( expression )`
    fn parse_parenthesized(&mut self) -> Result<Expression, Error> {
        self.expect(&TokenKind::LeftParen)?;
        let expression = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(expression)
    }

    /// Comma-separated items through the closing `close` token.
    fn parse_list<T>(
        &mut self,
        close: &TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(item(self)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }

    // Token helpers

    fn advance(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.scanner.next_token());
    }

    /// Consumes the leading keyword of a statement and returns its line.
    fn keyword(&mut self) -> u32 {
        let line = self.current.line();
        self.advance();
        line
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    fn check_identifier(&self, name: &str) -> bool {
        matches!(&self.current.kind, TokenKind::Identifier(s) if s == name)
    }

    fn check_update_target(&self, target: &Expression) -> Result<(), Error> {
        if matches!(target, Expression::Identifier(_) | Expression::Member(_)) {
            Ok(())
        } else {
            Err(self.error("Invalid left-hand side expression in update operation"))
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), Error> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(format!("Expected {}, found {}", kind, self.current.kind)))
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier, Error> {
        let TokenKind::Identifier(name) = &self.current.kind else {
            return Err(self.error(format!(
                "Expected identifier, found {}",
                self.current.kind
            )));
        };
        let id = Identifier::new(name.clone(), self.current.line());
        self.advance();
        Ok(id)
    }

    /// Automatic semicolon insertion: `;` may be omitted before `}`, at the
    /// end of input, or when the next token starts on a later line.
    fn consume_semicolon(&mut self) -> Result<(), Error> {
        if self.eat(&TokenKind::Semicolon)
            || matches!(self.current.kind, TokenKind::RightBrace | TokenKind::Eof)
            || self.current.line() > self.previous.line()
        {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn unexpected(&self) -> Error {
        self.error(format!("Unexpected {}", self.current.kind))
    }

    fn unsupported(&self, construct: &str) -> Error {
        Error::Unsupported {
            construct: construct.into(),
            line: self.current.line(),
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Syntax {
            message: message.into(),
            line: self.current.line(),
        }
    }
}

fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn literal(kind: &TokenKind) -> Option<Literal> {
    match kind {
        TokenKind::Number(n) => Some(Literal::Number(*n)),
        TokenKind::String(s) => Some(Literal::String(s.clone())),
        TokenKind::True => Some(Literal::Boolean(true)),
        TokenKind::False => Some(Literal::Boolean(false)),
        TokenKind::Null => Some(Literal::Null),
        _ => None,
    }
}

fn unary_operator(kind: &TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Bang => Some(UnaryOperator::LogicalNot),
        TokenKind::Minus => Some(UnaryOperator::Minus),
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Tilde => Some(UnaryOperator::BitwiseNot),
        TokenKind::Typeof => Some(UnaryOperator::Typeof),
        TokenKind::Void => Some(UnaryOperator::Void),
        TokenKind::Delete => Some(UnaryOperator::Delete),
        _ => None,
    }
}

fn update_operator(kind: &TokenKind) -> Option<UpdateOperator> {
    match kind {
        TokenKind::PlusPlus => Some(UpdateOperator::Increment),
        TokenKind::MinusMinus => Some(UpdateOperator::Decrement),
        _ => None,
    }
}

/// Token to binary operator, for every level `parse_binary` handles.
fn binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let operator = match kind {
        TokenKind::QuestionQuestion => BinaryOperator::NullishCoalescing,
        TokenKind::PipePipe => BinaryOperator::LogicalOr,
        TokenKind::AmpersandAmpersand => BinaryOperator::LogicalAnd,
        TokenKind::Pipe => BinaryOperator::BitwiseOr,
        TokenKind::Caret => BinaryOperator::BitwiseXor,
        TokenKind::Ampersand => BinaryOperator::BitwiseAnd,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::NotEqual => BinaryOperator::NotEqual,
        TokenKind::StrictEqual => BinaryOperator::StrictEqual,
        TokenKind::StrictNotEqual => BinaryOperator::StrictNotEqual,
        TokenKind::LessThan => BinaryOperator::LessThan,
        TokenKind::LessThanEqual => BinaryOperator::LessThanEqual,
        TokenKind::GreaterThan => BinaryOperator::GreaterThan,
        TokenKind::GreaterThanEqual => BinaryOperator::GreaterThanEqual,
        TokenKind::In => BinaryOperator::In,
        TokenKind::Instanceof => BinaryOperator::InstanceOf,
        TokenKind::LeftShift => BinaryOperator::LeftShift,
        TokenKind::RightShift => BinaryOperator::RightShift,
        TokenKind::UnsignedRightShift => BinaryOperator::UnsignedRightShift,
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Percent => BinaryOperator::Modulo,
        _ => return None,
    };
    Some(operator)
}

fn assignment_operator(kind: &TokenKind) -> Option<AssignmentOperator> {
    let operator = match kind {
        TokenKind::Equal => AssignmentOperator::Assign,
        TokenKind::PlusEqual => AssignmentOperator::AddAssign,
        TokenKind::MinusEqual => AssignmentOperator::SubtractAssign,
        TokenKind::StarEqual => AssignmentOperator::MultiplyAssign,
        TokenKind::SlashEqual => AssignmentOperator::DivideAssign,
        TokenKind::PercentEqual => AssignmentOperator::ModuloAssign,
        TokenKind::StarStarEqual => AssignmentOperator::ExponentAssign,
        TokenKind::LeftShiftEqual => AssignmentOperator::LeftShiftAssign,
        TokenKind::RightShiftEqual => AssignmentOperator::RightShiftAssign,
        TokenKind::UnsignedRightShiftEqual => AssignmentOperator::UnsignedRightShiftAssign,
        TokenKind::AmpersandEqual => AssignmentOperator::BitwiseAndAssign,
        TokenKind::PipeEqual => AssignmentOperator::BitwiseOrAssign,
        TokenKind::CaretEqual => AssignmentOperator::BitwiseXorAssign,
        TokenKind::AmpersandAmpersandEqual => AssignmentOperator::LogicalAndAssign,
        TokenKind::PipePipeEqual => AssignmentOperator::LogicalOrAssign,
        TokenKind::QuestionQuestionEqual => AssignmentOperator::NullishCoalescingAssign,
        _ => return None,
    };
    Some(operator)
}
