/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Rendering shared by every node
/// - expressions: Arithmetic expressions and relational conditions
/// - statements: Statements and the program root
pub mod ast;
pub mod expressions;
pub mod statements;
