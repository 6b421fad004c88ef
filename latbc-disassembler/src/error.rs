//! Disassembler errors

use latbc_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Unexpected end of input at offset {offset}")]
    EndOfStream { offset: u64 },

    #[error("Unknown opcode 0x{opcode:02X} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: u64 },

    #[error("Unknown register 0x{register:02X} at offset {offset}")]
    UnknownRegister { register: u8, offset: u64 },

    #[error("Unknown header tag {:?} at offset {offset}", as_char(.tag))]
    UnknownHeaderTag { tag: u8, offset: u64 },

    #[error("Unknown header value nature {:?} at offset {offset}", as_char(.nature))]
    UnknownCheckedNature { nature: u8, offset: u64 },

    #[error("Header field {:?} expects a string value, found an integer", as_char(.tag))]
    HeaderTypeMismatch { tag: u8 },

    #[error("Unknown file version: expected {expected}, found {found}")]
    VersionMismatch { expected: i64, found: i64 },

    #[error("String at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: u64 },

    #[error("Integer of {length} bytes at offset {offset} does not fit in 64 bits")]
    IntegerOverflow { length: usize, offset: u64 },

    #[error("Block {index} declares {declared} bytes but its instructions span {consumed}")]
    BlockOverrun { index: usize, declared: u64, consumed: u64 },

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DisassemblerError {
    /// Input ended in the middle of a header, block or instruction
    pub fn is_truncation(&self) -> bool {
        matches!(self, DisassemblerError::EndOfStream { .. })
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DisassemblerError::UnknownOpcode { opcode: 0xFF, offset: 12 };
        assert_eq!(err.to_string(), "Unknown opcode 0xFF at offset 12");

        let err = DisassemblerError::UnknownHeaderTag { tag: b'X', offset: 5 };
        assert_eq!(err.to_string(), "Unknown header tag 'X' at offset 5");

        let err = DisassemblerError::VersionMismatch { expected: 1000, found: 999 };
        assert_eq!(err.to_string(), "Unknown file version: expected 1000, found 999");
    }

    #[test]
    fn test_is_truncation() {
        assert!(DisassemblerError::EndOfStream { offset: 0 }.is_truncation());
        assert!(!DisassemblerError::InvalidUtf8 { offset: 0 }.is_truncation());
    }

    #[test]
    fn test_from_spec_error() {
        let err: DisassemblerError = SpecError::UnknownRegister(0x40).into();
        assert_eq!(err.to_string(), "Unknown register: 0x40");
    }
}
