pub mod aliases;
pub mod commands;
pub mod parser;
pub mod user;
