//! Single-pass compile loop: dispatch each line to the validator for its
//! mnemonic's format, collect encoded words and diagnostics in source order.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::encoder;
use crate::error::{AsmError, Diagnostic};
use crate::isa::r12::{self, Encoding, Format};
use crate::parser;

/// Result of compiling one source unit. Instructions and diagnostics each
/// keep source order; a line contributes to exactly one of the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOutput {
    pub instructions: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compile an ordered sequence of source lines. Blank lines are skipped;
/// every other line yields either one 12-bit instruction word or one
/// diagnostic carrying its 1-based line number. Never fails as a whole.
pub fn compile<'a, I>(lines: I) -> CompileOutput
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = CompileOutput::default();
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match assemble_line(raw) {
            Ok(word) => {
                trace!(line, %word, "encoded");
                out.instructions.push(word);
            }
            Err(kind) => {
                debug!(line, %kind, "rejected");
                out.diagnostics.push(Diagnostic { line, kind });
            }
        }
    }
    out
}

fn assemble_line(raw: &str) -> Result<String, AsmError> {
    let line = parser::split(raw)?;
    let desc = r12::lookup(line.mnemonic)
        .ok_or_else(|| AsmError::UnknownOpcode(line.mnemonic.to_string()))?;

    let arity = desc.encoding.format().arity();
    if line.operands.len() != arity {
        return Err(AsmError::MalformedLine(format!(
            "{} expects {} operands, found {}",
            desc.mnemonic,
            arity,
            line.operands.len()
        )));
    }

    match desc.encoding {
        Encoding::RegisterRegister { group, sub } => {
            let rd = register(line.operands[0])?;
            let rs1 = register(line.operands[1])?;
            let rs2 = register(line.operands[2])?;
            Ok(encoder::register_register(rd, rs1, rs2, sub, group))
        }
        Encoding::RegisterImmediate { opcode } => {
            let rd = register(line.operands[0])?;
            let rs = register(line.operands[1])?;
            let imm = immediate(line.operands[2])?;
            if !(0..=15).contains(&imm) {
                return Err(AsmError::ImmediateOutOfRange {
                    value: imm,
                    format: Format::RegisterImmediate,
                });
            }
            Ok(encoder::register_immediate(rd, rs, imm as u32, opcode))
        }
        Encoding::RegisterOnly { opcode } => {
            let rd = register(line.operands[0])?;
            let imm = immediate(line.operands[1])?;
            if !(-32..=31).contains(&imm) {
                return Err(AsmError::ImmediateOutOfRange {
                    value: imm,
                    format: Format::RegisterOnly,
                });
            }
            Ok(encoder::register_only(rd, imm, opcode))
        }
    }
}

/// Register tokens are trimmed and uppercased before lookup.
fn register(token: &str) -> Result<u8, AsmError> {
    let name = token.trim().to_uppercase();
    r12::register_index(&name).ok_or(AsmError::InvalidRegister(name))
}

/// Immediate tokens are trimmed only; range checks are format-specific and
/// happen at the call site.
fn immediate(token: &str) -> Result<i32, AsmError> {
    let text = token.trim();
    text.parse::<i32>()
        .map_err(|_| AsmError::InvalidImmediate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_tokens_fold_case() {
        assert_eq!(register(" a ").unwrap(), 0);
        assert_eq!(register("D").unwrap(), 3);
        assert_eq!(
            register("x"),
            Err(AsmError::InvalidRegister("X".to_string()))
        );
    }

    #[test]
    fn immediate_tokens_trim_but_keep_sign() {
        assert_eq!(immediate(" -3 ").unwrap(), -3);
        assert_eq!(immediate("15").unwrap(), 15);
        assert!(matches!(
            immediate("abc"),
            Err(AsmError::InvalidImmediate(_))
        ));
    }

    #[test]
    fn operand_count_is_checked_before_operands() {
        let err = assemble_line("add A, B").unwrap_err();
        assert!(matches!(err, AsmError::MalformedLine(_)));
    }

    #[test]
    fn validation_failure_produces_no_word() {
        assert!(assemble_line("addi A, B, 16").is_err());
        assert!(assemble_line("add A, X, C").is_err());
    }
}
