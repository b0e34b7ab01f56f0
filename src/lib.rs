pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod facts;
pub mod graph;
pub mod reporting;
pub mod rules;
pub mod types;
pub mod validator;
