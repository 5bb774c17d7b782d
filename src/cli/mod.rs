//! Command-line surface: argument definitions, logging setup and
//! everything that ends up printed on the terminal

pub mod args;
pub mod report;
pub mod table;
