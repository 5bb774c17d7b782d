//! Implementations that are useful accross the whole project
//!
//! Month arithmetic, rate tables, projection and comparison

pub mod compare;
pub mod date;
pub mod entry;
pub mod period;
pub mod project;
pub mod rates;
