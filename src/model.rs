//! Grammar-agnostic data model for parsed declarations.

/// A recognized declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionDecl),
    Variable(VariableDecl),
}

/// Head of a function declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Empty for anonymous functions
    pub name: String,
    /// Raw text between the parentheses, unparsed
    pub args: Option<String>,
    pub options: FunctionOptions,
}

/// Flags a grammar attaches to a function head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionOptions {
    /// Accessor setter: documented with a visibility tag only
    pub as_setter: bool,
}

/// A variable assignment or bare declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableDecl {
    pub name: String,
    /// Right-hand side, trimmed, up to the statement terminator
    pub value: Option<String>,
}

/// One entry of a function's argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Declared or inferred from a default value
    pub type_name: Option<String>,
    pub name: String,
}

impl Argument {
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            type_name: None,
            name: name.into(),
        }
    }
}
