//! # Latitude Bytecode Format
//!
//! Core types shared by the bytecode tools: the register and opcode tables,
//! decoded instructions and the file header.
//!
//! ## File Layout
//! - Header: version, tagged metadata fields, `.` terminator, sentinel byte
//! - Body: length-prefixed blocks of back-to-back instructions
//! - Integers: sign byte (signed values only), then little-endian magnitude
//! - Strings: raw bytes, `00 2E` for an embedded NUL, `00 00` terminator

pub mod register;
pub mod opcode;
pub mod instruction;
pub mod header;
pub mod error;

pub use register::{Register, NUM_REGISTERS};
pub use opcode::{ArgType, Opcode, NUM_OPCODES};
pub use instruction::{Arg, Instruction, MethodRef};
pub use header::Header;
pub use error::SpecError;

/// Format version written by the compiler
pub const VERSION: i64 = 1000;

/// Magnitude bytes of an integer literal or header integer
pub const INT_WIDTH: usize = 4;

/// Magnitude bytes of a method reference
pub const METHOD_WIDTH: usize = 4;

/// Magnitude bytes of a block length prefix
pub const BLOCK_LEN_WIDTH: usize = 8;

/// Header tag bytes
pub const TAG_MODULE: u8 = b'M';
pub const TAG_PACKAGE: u8 = b'P';
pub const TAG_END: u8 = b'.';

/// Header value nature bytes
pub const NATURE_INTEGER: u8 = b'#';
pub const NATURE_STRING: u8 = b'$';

/// Byte following a NUL inside a string that stands for a literal NUL
pub const STRING_NUL_ESCAPE: u8 = b'.';
