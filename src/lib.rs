// Core modules
pub mod ai;
pub mod cli;
pub mod config;
pub mod eval;
pub mod infrastructure;
