/// Name of the integer type.
pub const INT_TYPE: &str = "бүтін";
/// Name of the float type.
pub const FLOAT_TYPE: &str = "бөлшек";
/// Name of the string type.
pub const STRING_TYPE: &str = "жол";
/// Name of the boolean type.
pub const BOOL_TYPE: &str = "логикалық";
/// Name of the type of functions that return nothing.
pub const VOID_TYPE: &str = "ештеңе";

/// The scalar or struct classification of a declared type, independent of its
/// array-ness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// `ештеңе`
    Void,
    /// `бүтін`
    Int,
    /// `бөлшек`
    Float,
    /// `жол`
    String,
    /// `логикалық`
    Bool,
    /// A user struct, by name.
    Struct(String),
}

impl Kind {
    /// Resolves a type name. Names that are not built in refer to structs.
    ///
    /// # Example
    /// ```
    /// use qurt::ast::Kind;
    ///
    /// assert_eq!(Kind::from_name("бүтін"), Kind::Int);
    /// assert_eq!(Kind::from_name("Нүкте"), Kind::Struct("Нүкте".to_string()));
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            INT_TYPE => Self::Int,
            FLOAT_TYPE => Self::Float,
            STRING_TYPE => Self::String,
            BOOL_TYPE => Self::Bool,
            VOID_TYPE => Self::Void,
            _ => Self::Struct(name.to_string()),
        }
    }

    /// Returns the name the type is written with.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Void => VOID_TYPE,
            Self::Int => INT_TYPE,
            Self::Float => FLOAT_TYPE,
            Self::String => STRING_TYPE,
            Self::Bool => BOOL_TYPE,
            Self::Struct(name) => name,
        }
    }
}

/// A declared type: a kind, optionally as a fixed-length array.
///
/// `[3]бүтін` is `TypeDesc { kind: Kind::Int, array_len: Some(3) }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDesc {
    /// The element kind.
    pub kind:      Kind,
    /// The array length, when the type is an array.
    pub array_len: Option<usize>,
}

impl TypeDesc {
    /// A non-array type of the given kind.
    #[must_use]
    pub const fn scalar(kind: Kind) -> Self {
        Self { kind,
               array_len: None }
    }

    /// The `ештеңе` type.
    #[must_use]
    pub const fn void() -> Self {
        Self::scalar(Kind::Void)
    }

    /// Returns `true` for the non-array `ештеңе` type.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self.kind, Kind::Void) && self.array_len.is_none()
    }

    /// The type of one element of this array type.
    #[must_use]
    pub fn element(&self) -> Self {
        Self::scalar(self.kind.clone())
    }
}

impl std::fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(len) = self.array_len {
            write!(f, "[{len}]")?;
        }
        f.write_str(self.kind.name())
    }
}

/// A name with a declared type: a struct field or a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field or parameter name.
    pub name: String,
    /// Its declared type.
    pub ty:   TypeDesc,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `құрылым Name { ... }`
    Struct(StructDecl),
    /// `функция name(...) type { ... }`
    Func(FuncDecl),
    /// `айнымалы name type = value`
    Var(VarDecl),
}

impl Decl {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(decl) => &decl.name,
            Self::Func(decl) => &decl.name,
            Self::Var(decl) => &decl.name,
        }
    }
}

/// A struct declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    /// The struct name.
    pub name:   String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Line number in the source code.
    pub line:   usize,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    /// The function name.
    pub name:        String,
    /// Parameters in declaration order.
    pub args:        Vec<Field>,
    /// The declared return type; `ештеңе` for none.
    pub return_type: TypeDesc,
    /// The statements of the body.
    pub body:        Vec<Stmt>,
    /// Line number in the source code.
    pub line:        usize,
}

/// A variable declaration, either global or inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The variable name.
    pub name:  String,
    /// The declared type.
    pub ty:    TypeDesc,
    /// The initializer. Without one the variable starts at its zero value.
    pub value: Option<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a literal value in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 32-bit floating-point literal.
    Float(f32),
    /// A string literal, escapes kept verbatim.
    String(String),
    /// `иә` or `жоқ`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for LiteralValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A call of a named function.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// Name of the function being called.
    pub name: String,
    /// Arguments to the function.
    pub args: Vec<Expr>,
    /// Line number in the source code.
    pub line: usize,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Name {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Array literal expression, such as `{1, 2, 3}`.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Function call expression.
    Call(CallExpr),
    /// Field selection, such as `p.x`.
    Selector {
        /// The struct-valued expression.
        expr:  Box<Self>,
        /// The selected field.
        field: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array indexing expression, such as `arr[2]`.
    Index {
        /// The array to index into.
        array: Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use qurt::ast::Expr;
    ///
    /// let expr = Expr::Name { name: "x".to_string(),
    ///                         line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Call(CallExpr { line, .. })
            | Self::Literal { line, .. }
            | Self::Name { line, .. }
            | Self::Array { line, .. }
            | Self::Selector { line, .. }
            | Self::Index { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}

/// An assignment `target = value`. The target is a name, a field selection or
/// an array element.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    /// Where the value is stored.
    pub target: Expr,
    /// The value being assigned.
    pub value:  Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// `егер (cond) { ... } әйтпесе ...`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    /// The condition; must evaluate to a boolean.
    pub cond:        Expr,
    /// Statements run when the condition holds.
    pub then_block:  Vec<Stmt>,
    /// The optional `әйтпесе` part.
    pub else_branch: Option<ElseBranch>,
    /// Line number in the source code.
    pub line:        usize,
}

/// What follows `әйтпесе`.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `әйтпесе егер ...`
    If(Box<IfStmt>),
    /// `әйтпесе { ... }`
    Block(Vec<Stmt>),
}

/// `қайтала (init; cond; post) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// Runs once before the first test.
    pub init: VarDecl,
    /// Tested before every iteration.
    pub cond: Expr,
    /// Runs after every iteration that did not break.
    pub post: AssignStmt,
    /// The loop body.
    pub body: Vec<Stmt>,
    /// Line number in the source code.
    pub line: usize,
}

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A block-scoped variable declaration.
    Var(VarDecl),
    /// An assignment.
    Assign(AssignStmt),
    /// A call whose result is discarded.
    Call(CallExpr),
    /// A conditional.
    If(IfStmt),
    /// A loop.
    For(ForStmt),
    /// `қайтар` with an optional value.
    Return {
        /// The returned value.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `тоқта`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `өткіз`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter. All tiers are left-associative.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual => 3,
            Self::Add | Self::Sub => 4,
            Self::Mul | Self::Div | Self::Mod => 5,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Not => "!",
                    })
    }
}
