use crate::error::AsmError;

/// One split source line: the mnemonic and the raw comma-separated operand
/// tokens. Tokens are not trimmed or case-folded here; the format validators
/// own that, since register tokens are uppercased but immediates are only
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub mnemonic: &'a str,
    pub operands: Vec<&'a str>,
}

/// Split a non-blank line on the first whitespace run. A mnemonic with no
/// operand list is not a supported shape.
pub fn split(raw: &str) -> Result<SourceLine<'_>, AsmError> {
    let trimmed = raw.trim();
    let Some((mnemonic, rest)) = trimmed.split_once(char::is_whitespace) else {
        return Err(AsmError::MalformedLine(format!(
            "missing operand list after {trimmed}"
        )));
    };
    Ok(SourceLine {
        mnemonic,
        operands: rest.split(',').collect(),
    })
}
