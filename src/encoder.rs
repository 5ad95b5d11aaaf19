//! Field packing for the three R12 instruction formats. All inputs are
//! assumed validated; these functions only lay out bits.

/// Width of every encoded instruction, in bits.
pub const INSTRUCTION_BITS: usize = 12;

pub const REGISTER_BITS: usize = 2;
pub const SUB_OPCODE_BITS: usize = 2;
pub const OPCODE_BITS: usize = 4;
pub const UNSIGNED_IMM_BITS: usize = 4;
pub const SIGNED_IMM_BITS: usize = 6;

/// Format `value` as exactly `width` binary digits.
fn field(value: u32, width: usize) -> String {
    debug_assert!(value < 1 << width, "{value} does not fit in {width} bits");
    format!("{value:0width$b}")
}

/// Two's-complement form of `value` over `width` bits, by modular reduction.
/// A direct width-formatted print of a negative number would emit a sign
/// instead of the complement.
fn signed_field(value: i32, width: usize) -> String {
    let mask = (1u32 << width) - 1;
    field(value as u32 & mask, width)
}

/// `rd(2) | rs1(2) | rs2(2) | sub(2) | group(4)`
pub fn register_register(rd: u8, rs1: u8, rs2: u8, sub: u8, group: u8) -> String {
    let mut word = String::with_capacity(INSTRUCTION_BITS);
    word.push_str(&field(rd.into(), REGISTER_BITS));
    word.push_str(&field(rs1.into(), REGISTER_BITS));
    word.push_str(&field(rs2.into(), REGISTER_BITS));
    word.push_str(&field(sub.into(), SUB_OPCODE_BITS));
    word.push_str(&field(group.into(), OPCODE_BITS));
    word
}

/// `rd(2) | rs(2) | imm(4, unsigned) | opcode(4)`
pub fn register_immediate(rd: u8, rs: u8, imm: u32, opcode: u8) -> String {
    let mut word = String::with_capacity(INSTRUCTION_BITS);
    word.push_str(&field(rd.into(), REGISTER_BITS));
    word.push_str(&field(rs.into(), REGISTER_BITS));
    word.push_str(&field(imm, UNSIGNED_IMM_BITS));
    word.push_str(&field(opcode.into(), OPCODE_BITS));
    word
}

/// `rd(2) | imm(6, two's complement) | opcode(4)`
pub fn register_only(rd: u8, imm: i32, opcode: u8) -> String {
    let mut word = String::with_capacity(INSTRUCTION_BITS);
    word.push_str(&field(rd.into(), REGISTER_BITS));
    word.push_str(&signed_field(imm, SIGNED_IMM_BITS));
    word.push_str(&field(opcode.into(), OPCODE_BITS));
    word
}
