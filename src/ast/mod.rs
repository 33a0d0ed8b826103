/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement sum type and its handles
/// - tree: The arena owning every statement of a parse
pub mod ast;
pub mod tree;
