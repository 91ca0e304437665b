// KPL Compiler Module
// Core of the compiler for the AI scripting language: code space, types,
// AST model, script container and code builder

pub mod ast;
pub mod code_builder;
pub mod code_space;
pub mod config;
pub mod datatypes;
pub mod error;
pub mod functions;
pub mod listing;
pub mod operators;
pub mod script;

pub use code_builder::{CodeBuilder, Location};
pub use code_space::ScriptCode;
pub use error::CompilerError;
pub use script::{Script, ScriptField};

/// Build the process-wide catalogs before any parsing starts
pub fn initialize() {
    datatypes::initialize();
}
