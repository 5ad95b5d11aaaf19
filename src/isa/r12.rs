use std::fmt;

use serde::{Deserialize, Serialize};

/// R12 teaching architecture: 4 registers, 12-bit instruction words,
/// three instruction formats distinguished by operand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    /// `op rd, rs1, rs2`
    RegisterRegister,
    /// `op rd, rs, imm` with imm in [0, 15]
    RegisterImmediate,
    /// `op rd, imm` with imm in [-32, 31]
    RegisterOnly,
}

impl Format {
    pub fn arity(self) -> usize {
        match self {
            Format::RegisterRegister | Format::RegisterImmediate => 3,
            Format::RegisterOnly => 2,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::RegisterRegister => "register-register",
            Format::RegisterImmediate => "register-immediate",
            Format::RegisterOnly => "register-only",
        };
        f.write_str(name)
    }
}

/// Opcode encoding for one mnemonic. The variant fixes the format, so a
/// mnemonic can never pair a format with the wrong opcode shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// 4-bit group opcode plus 2-bit sub-opcode.
    RegisterRegister { group: u8, sub: u8 },
    /// Single 4-bit opcode.
    RegisterImmediate { opcode: u8 },
    /// Single 4-bit opcode.
    RegisterOnly { opcode: u8 },
}

impl Encoding {
    pub fn format(self) -> Format {
        match self {
            Encoding::RegisterRegister { .. } => Format::RegisterRegister,
            Encoding::RegisterImmediate { .. } => Format::RegisterImmediate,
            Encoding::RegisterOnly { .. } => Format::RegisterOnly,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub encoding: Encoding,
}

macro_rules! rr {
    ($mn:literal, $group:literal, $sub:literal) => {
        InstrDesc {
            mnemonic: $mn,
            encoding: Encoding::RegisterRegister { group: $group, sub: $sub },
        }
    };
}

macro_rules! ri {
    ($mn:literal, $opcode:literal) => {
        InstrDesc {
            mnemonic: $mn,
            encoding: Encoding::RegisterImmediate { opcode: $opcode },
        }
    };
}

macro_rules! ro {
    ($mn:literal, $opcode:literal) => {
        InstrDesc {
            mnemonic: $mn,
            encoding: Encoding::RegisterOnly { opcode: $opcode },
        }
    };
}

/// The closed R12 instruction set. Mnemonics are lowercase and matched
/// case-sensitively.
pub const TABLE: &[InstrDesc] = &[
    rr!("add", 0, 0),
    rr!("sub", 0, 1),
    rr!("mult", 0, 2),
    rr!("div", 0, 3),
    rr!("mod", 1, 0),
    rr!("and", 1, 1),
    rr!("or", 1, 2),
    rr!("xor", 1, 3),
    rr!("beq", 2, 0),
    rr!("bne", 2, 1),
    rr!("blt", 2, 2),
    rr!("ble", 2, 3),
    ri!("addi", 3),
    ri!("subi", 4),
    ri!("multi", 5),
    ri!("divi", 6),
    ri!("modi", 7),
    ri!("shli", 8),
    ri!("shri", 9),
    ri!("ld", 10),
    ri!("sd", 11),
    ri!("jalr", 12),
    ro!("jal", 13),
    ro!("bz", 14),
    ro!("bnz", 15),
];

/// Register names and their 2-bit indices. Lookup expects the name already
/// trimmed and uppercased.
pub const REGISTERS: &[(&str, u8)] = &[("A", 0), ("B", 1), ("C", 2), ("D", 3)];

pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

pub fn register_index(name: &str) -> Option<u8> {
    REGISTERS.iter().find(|(n, _)| *n == name).map(|&(_, i)| i)
}
