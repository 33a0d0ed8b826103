use std::ops::Index;

use super::ast::{Stmt, StmtId};

/// Append-only arena owning every statement of one parse.
///
/// Handles returned by [`AstTree::emplace`] stay valid for the lifetime of the
/// tree. `program` lists the top-level forms in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AstTree {
    pub program: Vec<StmtId>,
    nodes: Vec<Stmt>,
}

impl AstTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `stmt` and returns its handle.
    pub fn emplace(&mut self, stmt: Stmt) -> StmtId {
        self.nodes.push(stmt);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: StmtId) -> Option<&Stmt> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level statements in source order.
    pub fn top_level(&self) -> impl Iterator<Item = &Stmt> + '_ {
        self.program.iter().map(move |id| &self[*id])
    }

    /// Renders the statement behind `id`, descending into lists and programs.
    pub fn describe(&self, id: StmtId) -> String {
        match &self[id] {
            Stmt::Identifier { name, .. } => format!("Identifier: {}", name),
            Stmt::Number { value, .. } => format!("Number: {:.6}", value),
            Stmt::Integer { value, .. } => format!("Integer: {}", value),
            Stmt::Character { value, .. } => format!("Character: {}", value),
            Stmt::Boolean { value, .. } => {
                format!("Boolean: {}", if *value { "t" } else { "nil" })
            }
            Stmt::String { value, .. } => format!("String: {}", value),
            Stmt::List { elements, .. } => self.describe_sequence("List: [ ", elements, "]"),
            Stmt::Program { elements, .. } => {
                self.describe_sequence("Program: ( ", elements, ")")
            }
        }
    }

    fn describe_sequence(&self, open: &str, elements: &[StmtId], close: &str) -> String {
        let mut string = String::from(open);
        for element in elements {
            string.push_str(&self.describe(*element));
            string.push(' ');
        }
        string.push_str(close);
        string
    }
}

impl Index<StmtId> for AstTree {
    type Output = Stmt;

    fn index(&self, id: StmtId) -> &Self::Output {
        &self.nodes[id]
    }
}
