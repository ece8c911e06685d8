// Abstract Syntax Tree definitions

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub body: Vec<Statement>,
}

/// One statement of a function body, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `expr` is kept as written: an integer literal or an identifier.
    VariableDeclaration { name: String, expr: String },
    Call { name: String, args: Vec<String> },
}
