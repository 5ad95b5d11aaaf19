use serde::{Deserialize, Serialize};

use crate::isa::r12::Format;

/// A single validation failure. Every kind is line-local: the line that
/// produced it yields no encoded instruction, and compilation continues with
/// the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum AsmError {
    #[error("unknown opcode {0}")]
    UnknownOpcode(String),
    #[error("malformed line: {0}")]
    MalformedLine(String),
    #[error("invalid register {0}")]
    InvalidRegister(String),
    #[error("invalid immediate {0}")]
    InvalidImmediate(String),
    #[error("immediate {value} out of range for {format} format")]
    ImmediateOutOfRange { value: i32, format: Format },
}

/// An [`AsmError`] bound to its 1-based source line number. The rendered form
/// is what the CLI prints on the error channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("error line {line}: {kind}")]
pub struct Diagnostic {
    pub line: usize,
    pub kind: AsmError,
}
