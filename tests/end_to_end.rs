//! End-to-end tests for the Latitude bytecode tools
//!
//! These tests build complete compiled files and check:
//! 1. Header decoding and version validation
//! 2. Block framing and the end-of-input convention
//! 3. The rendered listing, line by line
//! 4. Failure modes for malformed and truncated files

mod common;

use common::{encode_all, FileBuilder};
use latbc_disassembler::{disassemble, disassemble_bytes, Config, Disassembler, DisassemblerError};
use latbc_spec::{Arg, Header, Instruction, MethodRef, Opcode, Register};

fn instr(opcode: Opcode, args: Vec<Arg>) -> Instruction {
    Instruction::new(opcode, args).unwrap()
}

// ============================================================================
// Header Tests
// ============================================================================

#[test]
fn test_header_with_module() {
    let bytes = FileBuilder::new().field(b'M', "core").end_header().build();
    let disassembler = Disassembler::new(bytes.as_slice(), Config::DEFAULT).unwrap();
    assert_eq!(disassembler.header(), &Header::new(1000).with_module("core"));
}

#[test]
fn test_header_info_lines() {
    let bytes = FileBuilder::new()
        .field(b'M', "collections")
        .field(b'P', "std")
        .end_header()
        .build();
    let listing = disassemble_bytes(&bytes, "lib/collections.latc").unwrap();
    assert_eq!(
        listing,
        "File: lib/collections.latc\nVersion: 1000\nModule: collections\nPackage: std\n"
    );
}

#[test]
fn test_wrong_version_is_fatal() {
    let bytes = FileBuilder::with_version(999)
        .end_header()
        .block(&[instr(Opcode::Ret, vec![])])
        .build();
    let mut out = Vec::new();
    let err = disassemble(bytes.as_slice(), "old.latc", &Config::DEFAULT, &mut out).unwrap_err();
    assert_eq!(err.to_string(), "Unknown file version: expected 1000, found 999");
    assert!(out.is_empty());
}

// ============================================================================
// Whole File Tests
// ============================================================================

#[test]
fn test_minimal_valid_file() {
    let bytes = FileBuilder::new().end_header().raw_block(0, &[]).build();
    let mut out = Vec::new();
    let summary = disassemble(bytes.as_slice(), "min.latc", &Config::DEFAULT, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "File: min.latc\nVersion: 1000\n<<0>>\n");
    assert_eq!(summary.blocks, 1);
    assert_eq!(summary.instructions, 0);
}

#[test]
fn test_method_with_nested_body() {
    // Outer block defines a nested method (block 1) and returns
    let outer = vec![
        instr(Opcode::Getl, vec![Arg::Register(Register::Slf)]),
        instr(Opcode::Mthd, vec![Arg::Method(MethodRef::new(1))]),
        instr(Opcode::Mov, vec![Arg::Register(Register::Ret), Arg::Register(Register::Ptr)]),
        instr(Opcode::Sym, vec![Arg::String("foo".into())]),
        instr(Opcode::Setf, vec![]),
    ];
    let inner = vec![
        instr(Opcode::Str, vec![Arg::String("say \"hi\"".into())]),
        instr(Opcode::Int, vec![Arg::Integer(-42)]),
        instr(Opcode::Yld, vec![Arg::Integer(3), Arg::Register(Register::Lit)]),
        instr(Opcode::Cmplx, vec![Arg::String("1.5".into()), Arg::String("2".into())]),
        instr(Opcode::Ret, vec![]),
    ];
    let bytes = FileBuilder::new()
        .field(b'M', "demo")
        .end_header()
        .block(&outer)
        .block(&inner)
        .build();

    let listing = disassemble_bytes(&bytes, "demo.latc").unwrap();
    let expected = r#"File: demo.latc
Version: 1000
Module: demo
<<0>>
  getl %slf
  mthd <<1>>
  mov %ret, %ptr
  sym "foo"
  setf
<<1>>
  str "say \"hi\""
  int -42
  yld 3, %lit
  cmplx "1.5", "2"
  ret
"#;
    assert_eq!(listing, expected);
}

#[test]
fn test_decoded_instructions_match_encoded() {
    let program = vec![
        instr(Opcode::Push, vec![Arg::Register(Register::Ptr), Arg::Register(Register::Arg)]),
        instr(Opcode::Float, vec![Arg::String("0.25".into())]),
        instr(Opcode::Locln, vec![Arg::Integer(4_000_000_000)]),
        instr(Opcode::Locfn, vec![Arg::String("a\0b".into())]),
        instr(Opcode::Dict, vec![Arg::Integer(0)]),
    ];
    let bytes = FileBuilder::new().end_header().block(&program).build();

    let blocks: Vec<_> = Disassembler::new(bytes.as_slice(), Config::DEFAULT)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].instructions, program);
    assert_eq!(blocks[0].consumed, encode_all(&program).len() as u64);
}

#[test]
fn test_overrun_accepted_and_next_block_follows() {
    let int = encode_all(&[instr(Opcode::Int, vec![Arg::Integer(7)])]);
    let bytes = FileBuilder::new()
        .end_header()
        .raw_block(1, &int)
        .block(&[instr(Opcode::Nret, vec![])])
        .build();

    let listing = disassemble_bytes(&bytes, "x").unwrap();
    assert!(listing.ends_with("<<0>>\n  int 7\n<<1>>\n  nret\n"));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_unknown_opcode_fails_run() {
    let bytes = FileBuilder::new()
        .end_header()
        .block(&[instr(Opcode::Ret, vec![])])
        .raw_block(1, &[0xFF])
        .build();
    let mut out = Vec::new();
    let err = disassemble(bytes.as_slice(), "bad.latc", &Config::DEFAULT, &mut out).unwrap_err();

    assert!(matches!(err, DisassemblerError::UnknownOpcode { opcode: 0xFF, .. }));
    // Blocks before the failure were already written
    assert!(String::from_utf8(out).unwrap().contains("<<0>>\n  ret\n"));
}

#[test]
fn test_truncated_length_prefix_is_error() {
    let mut bytes = FileBuilder::new().end_header().raw_block(0, &[]).build();
    bytes.extend_from_slice(&[0x00, 0x00, 0x00]);
    let err = disassemble_bytes(&bytes, "x").unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn test_truncated_instruction_is_error() {
    // push needs two registers, only one present
    let bytes = FileBuilder::new().end_header().raw_block(3, &[0x02, 0x01]).build();
    let err = disassemble_bytes(&bytes, "x").unwrap_err();
    assert!(matches!(err, DisassemblerError::EndOfStream { .. }));
}

#[test]
fn test_truncated_header_is_error() {
    let bytes = FileBuilder::new().field(b'P', "std").build();
    let err = disassemble_bytes(&bytes, "x").unwrap_err();
    assert!(err.is_truncation());
}
