//! Error types using thiserror
//!
//! Error hierarchy:
//! - ExecError: Issues with spawning or running an external command
//! - ParseError: Issues with decoding the output of `go list`

use thiserror::Error;

/// Errors related to running an external command
#[derive(Error, Debug)]
pub enum ExecError {
    /// The process could not be started at all
    #[error("failed to start {program}: {source}")]
    Start {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status; the message is its stderr
    #[error("{message}")]
    Failed { program: String, message: String },

    /// The process exited with a non-zero status and stayed silent
    #[error("{program} exited with {}", describe_code(.code))]
    Status { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by a signal)".to_string(),
    }
}

/// Errors related to decoding module listings
#[derive(Error, Debug)]
pub enum ParseError {
    /// One of the JSON values could not be decoded
    #[error("invalid module JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level value of the listing is not a JSON object
    #[error("invalid module JSON: value {index} is {}, not an object", article(.kind))]
    NotAnObject { index: usize, kind: &'static str },
}

fn article(kind: &str) -> String {
    match kind.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {}", kind),
        _ => format!("a {}", kind),
    }
}

impl ExecError {
    /// Creates a new Start error
    pub fn start(program: impl Into<String>, source: std::io::Error) -> Self {
        ExecError::Start {
            program: program.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(program: impl Into<String>, message: impl Into<String>) -> Self {
        ExecError::Failed {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Creates a new Status error
    pub fn status(program: impl Into<String>, code: Option<i32>) -> Self {
        ExecError::Status {
            program: program.into(),
            code,
        }
    }

}

impl ParseError {
    /// Creates a new NotAnObject error
    pub fn not_an_object(index: usize, kind: &'static str) -> Self {
        ParseError::NotAnObject { index, kind }
    }
}
