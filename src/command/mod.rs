pub mod parser;
pub mod session;

pub use parser::Command;
pub use session::{Flow, Session};
