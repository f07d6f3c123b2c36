//! Abstract Syntax Tree (AST) definitions for JavaScript.
//!
//! These structures are designed to be ESTree-compatible where possible.
//! Every statement, every identifier, and the expression kinds that can
//! become a step (assignments and updates) carry the 1-based source line
//! they start on.

/// A complete JavaScript program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// An identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    /// Source line
    pub line: u32,
}

impl Identifier {
    /// Creates an identifier on the given line.
    pub fn new(name: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// A JavaScript statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    /// Function declaration
    FunctionDeclaration(FunctionDeclaration),
    Expression(ExpressionStatement),
    Block(BlockStatement),
    If(IfStatement),
    Switch(SwitchStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    Return(ReturnStatement),
    Break(JumpStatement),
    Continue(JumpStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    /// Empty statement (;)
    Empty(EmptyStatement),
}

impl Statement {
    /// The line the statement starts on.
    pub fn line(&self) -> u32 {
        match self {
            Statement::VariableDeclaration(s) => s.line,
            Statement::FunctionDeclaration(s) => s.line,
            Statement::Expression(s) => s.line,
            Statement::Block(s) => s.line,
            Statement::If(s) => s.line,
            Statement::Switch(s) => s.line,
            Statement::While(s) => s.line,
            Statement::DoWhile(s) => s.line,
            Statement::For(s) => s.line,
            Statement::Return(s) => s.line,
            Statement::Break(s) | Statement::Continue(s) => s.line,
            Statement::Throw(s) => s.line,
            Statement::Try(s) => s.line,
            Statement::Empty(s) => s.line,
        }
    }

    /// The ESTree node type name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::Expression(_) => "ExpressionStatement",
            Statement::Block(_) => "BlockStatement",
            Statement::If(_) => "IfStatement",
            Statement::Switch(_) => "SwitchStatement",
            Statement::While(_) => "WhileStatement",
            Statement::DoWhile(_) => "DoWhileStatement",
            Statement::For(_) => "ForStatement",
            Statement::Return(_) => "ReturnStatement",
            Statement::Break(_) => "BreakStatement",
            Statement::Continue(_) => "ContinueStatement",
            Statement::Throw(_) => "ThrowStatement",
            Statement::Try(_) => "TryStatement",
            Statement::Empty(_) => "EmptyStatement",
        }
    }
}

/// The body of a loop or a branch of an `if`.
///
/// Both shapes are legal JavaScript: `while (x) { ... }` and `while (x) y();`.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A braced block
    Block(BlockStatement),
    /// A single unbraced statement
    Single(Box<Statement>),
}

impl Body {
    /// Wraps a parsed statement, unwrapping braced blocks.
    pub fn from_statement(statement: Statement) -> Self {
        match statement {
            Statement::Block(block) => Body::Block(block),
            other => Body::Single(Box::new(other)),
        }
    }

    /// The line of the body's first token.
    pub fn line(&self) -> u32 {
        match self {
            Body::Block(block) => block.line,
            Body::Single(statement) => statement.line(),
        }
    }
}

/// Variable declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// var declaration
    Var,
    /// let declaration
    Let,
    /// const declaration
    Const,
}

impl VariableKind {
    /// The keyword introducing the declaration.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

/// A variable declaration statement.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    /// The declarators
    pub declarations: Vec<VariableDeclarator>,
    /// Source line of the keyword
    pub line: u32,
}

/// A single variable declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expression>,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    /// The function name
    pub id: Identifier,
    /// The parameters
    pub params: Vec<Identifier>,
    /// The function body
    pub body: Vec<Statement>,
    /// Source line of the `function` keyword
    pub line: u32,
}

/// An expression statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    /// Source line
    pub line: u32,
}

/// A block statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    /// Source line of the opening brace
    pub line: u32,
}

/// An if statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition
    pub test: Expression,
    /// The then branch
    pub consequent: Body,
    pub alternate: Option<Alternate>,
    /// Source line of the `if` keyword
    pub line: u32,
}

/// The `else` part of an if statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Alternate {
    /// `else if (...)`, continuing the same chain
    ElseIf(Box<IfStatement>),
    /// A plain `else`
    Else(Body),
}

/// A while statement.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// The condition
    pub test: Expression,
    /// The loop body
    pub body: Body,
    /// Source line
    pub line: u32,
}

/// A do-while statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    /// The loop body
    pub body: Body,
    /// The condition
    pub test: Expression,
    /// Source line
    pub line: u32,
}

/// A for statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    /// The initializer
    pub init: Option<ForInit>,
    /// The condition
    pub test: Option<Expression>,
    /// The update expression
    pub update: Option<Expression>,
    /// The loop body
    pub body: Body,
    /// Source line
    pub line: u32,
}

/// For loop initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    /// Variable declaration
    Declaration(VariableDeclaration),
    /// Expression
    Expression(Expression),
}

/// A switch statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    /// The case clauses
    pub cases: Vec<SwitchCase>,
    /// Source line
    pub line: u32,
}

/// A switch case clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

/// A return statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The return value
    pub argument: Option<Expression>,
    /// Source line
    pub line: u32,
}

/// A break or continue statement.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStatement {
    /// Optional target label
    pub label: Option<Identifier>,
    /// Source line
    pub line: u32,
}

/// A throw statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    /// The thrown expression
    pub argument: Expression,
    /// Source line
    pub line: u32,
}

/// A try statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    /// The try block
    pub block: BlockStatement,
    /// The catch clause
    pub handler: Option<CatchClause>,
    /// The finally block
    pub finalizer: Option<BlockStatement>,
    /// Source line
    pub line: u32,
}

/// A catch clause.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// The error parameter
    pub param: Option<Identifier>,
    /// The catch body
    pub body: BlockStatement,
}

/// An empty statement.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStatement {
    /// Source line of the semicolon
    pub line: u32,
}

/// A JavaScript expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value
    Literal(Literal),
    /// Identifier reference
    Identifier(Identifier),
    /// this keyword
    This,
    /// Array literal
    Array(ArrayExpression),
    /// Object literal
    Object(ObjectExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Assignment(AssignmentExpression),
    Call(CallExpression),
    Member(MemberExpression),
    Conditional(ConditionalExpression),
    /// new expression
    New(NewExpression),
    Update(UpdateExpression),
    Sequence(SequenceExpression),
}

impl Expression {
    /// The ESTree node type name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::Identifier(_) => "Identifier",
            Expression::This => "ThisExpression",
            Expression::Array(_) => "ArrayExpression",
            Expression::Object(_) => "ObjectExpression",
            Expression::Binary(b) if b.operator.is_logical() => "LogicalExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Assignment(_) => "AssignmentExpression",
            Expression::Call(_) => "CallExpression",
            Expression::Member(_) => "MemberExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::New(_) => "NewExpression",
            Expression::Update(_) => "UpdateExpression",
            Expression::Sequence(_) => "SequenceExpression",
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal
    Number(f64),
    /// String literal
    String(String),
    /// Boolean literal
    Boolean(bool),
    /// null literal
    Null,
}

/// An array expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Option<Expression>>,
}

/// An object expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    /// The properties
    pub properties: Vec<Property>,
}

/// An object property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key
    pub key: PropertyKey,
    /// The property value
    pub value: Expression,
}

/// A property key.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    /// Identifier key
    Identifier(Identifier),
    Literal(Literal),
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    /// The operator
    pub operator: BinaryOperator,
    /// The left operand
    pub left: Box<Expression>,
    /// The right operand
    pub right: Box<Expression>,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    // Comparison
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    // Logical
    LogicalAnd,
    LogicalOr,
    NullishCoalescing,
    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    // Other
    In,
    InstanceOf,
}

impl BinaryOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponent => "**",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanEqual => ">=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::NullishCoalescing => "??",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::In => "in",
            BinaryOperator::InstanceOf => "instanceof",
        }
    }

    /// Whether ESTree models this operator as a `LogicalExpression`.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr | BinaryOperator::NullishCoalescing
        )
    }
}

/// A unary expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    /// The operator
    pub operator: UnaryOperator,
    /// The operand
    pub argument: Box<Expression>,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// -
    Minus,
    /// +
    Plus,
    /// !
    LogicalNot,
    /// ~
    BitwiseNot,
    /// typeof
    Typeof,
    /// void
    Void,
    /// delete
    Delete,
}

impl UnaryOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Delete => "delete",
        }
    }

    /// Keyword operators are separated from their operand by a space.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            UnaryOperator::Typeof | UnaryOperator::Void | UnaryOperator::Delete
        )
    }
}

/// An assignment expression.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    /// The operator
    pub operator: AssignmentOperator,
    /// The left-hand side
    pub left: Box<Expression>,
    /// The right-hand side
    pub right: Box<Expression>,
    /// Source line of the left-hand side
    pub line: u32,
}

/// Assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    ExponentAssign,
    LeftShiftAssign,
    RightShiftAssign,
    UnsignedRightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    LogicalAndAssign,
    LogicalOrAssign,
    NullishCoalescingAssign,
}

impl AssignmentOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::ModuloAssign => "%=",
            AssignmentOperator::ExponentAssign => "**=",
            AssignmentOperator::LeftShiftAssign => "<<=",
            AssignmentOperator::RightShiftAssign => ">>=",
            AssignmentOperator::UnsignedRightShiftAssign => ">>>=",
            AssignmentOperator::BitwiseAndAssign => "&=",
            AssignmentOperator::BitwiseOrAssign => "|=",
            AssignmentOperator::BitwiseXorAssign => "^=",
            AssignmentOperator::LogicalAndAssign => "&&=",
            AssignmentOperator::LogicalOrAssign => "||=",
            AssignmentOperator::NullishCoalescingAssign => "??=",
        }
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    /// The arguments
    pub arguments: Vec<Expression>,
}

/// A member access expression.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    /// The object
    pub object: Box<Expression>,
    /// The property
    pub property: MemberProperty,
}

/// Member property.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    /// `obj.name`
    Identifier(Identifier),
    /// `obj[expr]`
    Computed(Box<Expression>),
}

/// A conditional (ternary) expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    /// The condition
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

/// A new expression.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    /// The constructor
    pub callee: Box<Expression>,
    /// The arguments
    pub arguments: Vec<Expression>,
}

/// An update expression (++/--)
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    /// The operator
    pub operator: UpdateOperator,
    /// The operand
    pub argument: Box<Expression>,
    pub prefix: bool,
    /// Source line of the first token
    pub line: u32,
}

/// Update operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperator {
    /// ++
    Increment,
    /// --
    Decrement,
}

impl UpdateOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

/// A sequence expression (comma operator).
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    /// The expressions
    pub expressions: Vec<Expression>,
}
