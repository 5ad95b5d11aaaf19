pub mod assembler;
pub mod encoder;
pub mod error;
pub mod parser;

pub mod isa {
    pub mod r12;
}

pub use assembler::{compile, CompileOutput};
pub use encoder::INSTRUCTION_BITS;
pub use error::{AsmError, Diagnostic};
pub use isa::r12::Format;
