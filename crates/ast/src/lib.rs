mod context;
mod expr;
mod factory;
pub mod keyword;
mod pprint;
mod token;
mod ty;

pub mod visitor;

pub use context::AstContext;
pub use expr::*;
pub use pprint::dump_expr;
pub use token::*;
pub use ty::*;
pub use visitor::Visitor;
