use std::fmt::Display;

/// Handle of a statement inside an [`AstTree`](super::tree::AstTree).
pub type StmtId = usize;

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    Identifier,
    Number,
    Integer,
    Character,
    Boolean,
    String,
    List,
    Program,
}

impl Display for StmtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StmtType::Identifier => "Identifier Statement",
            StmtType::Number => "Number Statement",
            StmtType::Integer => "Integer Statement",
            StmtType::Character => "Character Statement",
            StmtType::Boolean => "Boolean Statement",
            StmtType::String => "String Statement",
            StmtType::List => "List Statement",
            StmtType::Program => "Program",
        };
        write!(f, "{}", name)
    }
}

/// A node of the syntax tree.
///
/// Every variant records the 1-based line of the token it was built from;
/// for lists and programs that is the line of the opening delimiter.
/// `List` and `Program` refer to their children by handle, the tree owns them.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Identifier { name: String, line: usize },
    Number { value: f64, line: usize },
    Integer { value: i64, line: usize },
    Character { value: char, line: usize },
    /// Never produced by the parser; reserved for the `t` and `nil` constants.
    Boolean { value: bool, line: usize },
    String { value: String, line: usize },
    /// `[ ... ]`
    List { elements: Vec<StmtId>, line: usize },
    /// `( ... )`
    Program { elements: Vec<StmtId>, line: usize },
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Identifier { .. } => StmtType::Identifier,
            Stmt::Number { .. } => StmtType::Number,
            Stmt::Integer { .. } => StmtType::Integer,
            Stmt::Character { .. } => StmtType::Character,
            Stmt::Boolean { .. } => StmtType::Boolean,
            Stmt::String { .. } => StmtType::String,
            Stmt::List { .. } => StmtType::List,
            Stmt::Program { .. } => StmtType::Program,
        }
    }

    pub fn get_line(&self) -> usize {
        match self {
            Stmt::Identifier { line, .. }
            | Stmt::Number { line, .. }
            | Stmt::Integer { line, .. }
            | Stmt::Character { line, .. }
            | Stmt::Boolean { line, .. }
            | Stmt::String { line, .. }
            | Stmt::List { line, .. }
            | Stmt::Program { line, .. } => *line,
        }
    }

    /// Child handles of a list or program, empty for leaves.
    pub fn children(&self) -> &[StmtId] {
        match self {
            Stmt::List { elements, .. } | Stmt::Program { elements, .. } => elements.as_slice(),
            _ => &[],
        }
    }
}
