pub mod cli;
pub mod commands;
pub mod phospho;
pub mod query;
pub mod schema;
pub mod store;
