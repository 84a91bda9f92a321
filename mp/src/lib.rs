pub mod cli;

pub use blockpad::Variant;
pub use cli::{run, Session};
