use pretty_assertions::assert_eq;
use r12_rs::isa::r12::REGISTERS;
use r12_rs::{compile, AsmError};

#[test]
fn register_register_field_order() {
    // rd=00, rs1=01, rs2=10, sub=00, group=0000
    let out = compile(["add A, B, C"]);
    assert_eq!(out.instructions, vec!["000110000000"]);

    // xor: group=1, sub=3
    let out = compile(["xor D, C, B"]);
    assert_eq!(out.instructions, vec!["111001110001"]);
}

#[test]
fn register_immediate_field_order() {
    // rd=00, rs=01, imm=1111, opcode(addi)=0011
    let out = compile(["addi A, B, 15"]);
    assert_eq!(out.instructions, vec!["001111110011"]);

    // sd: opcode=11
    let out = compile(["sd C, D, 0"]);
    assert_eq!(out.instructions, vec!["101100001011"]);
}

#[test]
fn register_only_field_order() {
    // rd=11, imm=000000, opcode(jal)=1101
    let out = compile(["jal D, 0"]);
    assert_eq!(out.instructions, vec!["110000001101"]);

    // bnz: opcode=1111
    let out = compile(["bnz B, 5"]);
    assert_eq!(out.instructions, vec!["010001011111"]);
}

#[test]
fn register_names_round_trip_through_rd_field() {
    for &(name, idx) in REGISTERS {
        let line = format!("bz {name}, 0");
        let out = compile([line.as_str()]);
        assert!(out.is_clean());
        let word = &out.instructions[0];
        let decoded = u8::from_str_radix(&word[0..2], 2).unwrap();
        assert_eq!(decoded, idx);
        let recovered = REGISTERS.iter().find(|&&(_, i)| i == decoded).unwrap().0;
        assert_eq!(recovered, name);
    }
}

#[test]
fn register_names_are_case_insensitive() {
    let upper = compile(["add A, B, C"]);
    let lower = compile(["add a, b, c"]);
    assert_eq!(upper.instructions, lower.instructions);
}

#[test]
fn mnemonics_are_case_sensitive() {
    let out = compile(["ADD A, B, C"]);
    assert!(out.instructions.is_empty());
    assert_eq!(
        out.diagnostics[0].kind,
        AsmError::UnknownOpcode("ADD".to_string())
    );
}

#[test]
fn operand_tokens_tolerate_extra_spaces() {
    let out = compile(["add  A ,  B ,C"]);
    assert!(out.is_clean());
    assert_eq!(out.instructions, vec!["000110000000"]);
}
