//! # Latitude Bytecode Disassembler
//!
//! Decode compiled Latitude bytecode into a readable instruction listing.
//!
//! ## File Structure
//!
//! - **Header**: version (must be 1000), optional module and package names
//! - **Body**: length-prefixed blocks of instructions, until end of input
//!
//! Nested method references (`mthd <<n>>`) are printed as-is and not followed.
//!
//! ## Example
//!
//! ```rust
//! use latbc_disassembler::disassemble_bytes;
//!
//! let mut bytes = vec![0x00, 0xE8, 0x03, 0x00, 0x00, b'.', 0x00];
//! bytes.extend_from_slice(&1u64.to_le_bytes());
//! bytes.push(0x11); // ret
//!
//! let listing = disassemble_bytes(&bytes, "example.latc").unwrap();
//! assert!(listing.contains("<<0>>\n  ret"));
//! ```

pub mod error;
pub mod config;
pub mod reader;
pub mod header;
pub mod decoder;
pub mod block;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use config::{BoundaryMode, Config};
pub use reader::ByteReader;
pub use header::decode_header;
pub use decoder::decode_instruction;
pub use block::{read_block, Block};
pub use formatter::format;
pub use disassembler::{disassemble, disassemble_bytes, Disassembler, Summary};
