// Compiler Error Handling

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CompilerError {
    // AST construction errors
    InvalidIdentifier(String),
    InvalidLiteral(String),
    InvalidArgument(String),
    BadOperation(String), // operator/operand arity mismatch
    UnknownCallable(String),

    // Script and code builder errors
    BadIndex(String),
    FullCodeData,
    FullFieldData,

    // Boundary errors
    IOError(String),
    ConfigError(String),
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::InvalidIdentifier(name) => {
                write!(f, "Invalid identifier '{}'", name)
            }
            CompilerError::InvalidLiteral(text) => {
                write!(f, "Invalid integer literal '{}'", text)
            }
            CompilerError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {}", msg)
            }
            CompilerError::BadOperation(msg) => {
                write!(f, "Bad operation: {}", msg)
            }
            CompilerError::UnknownCallable(name) => {
                write!(f, "Unknown callable '{}'", name)
            }
            CompilerError::BadIndex(msg) => {
                write!(f, "Bad index: {}", msg)
            }
            CompilerError::FullCodeData => {
                write!(f, "Code data is full - script exceeds the code capacity")
            }
            CompilerError::FullFieldData => {
                write!(f, "Field data is full - script exceeds the field capacity")
            }
            CompilerError::IOError(msg) => {
                write!(f, "IO error: {}", msg)
            }
            CompilerError::ConfigError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CompilerError {}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IOError(err.to_string())
    }
}

impl From<toml::de::Error> for CompilerError {
    fn from(err: toml::de::Error) -> Self {
        CompilerError::ConfigError(err.to_string())
    }
}
