pub mod context;
pub mod fill;
pub mod outlet;
pub mod parser;
pub mod prompt;
pub mod workflow;
