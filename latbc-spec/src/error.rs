//! # Error Types for the bytecode model

use crate::opcode::{ArgType, Opcode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Unknown opcode: {0:#04X}")]
    UnknownOpcode(u8),

    #[error("Unknown register: {0:#04X}")]
    UnknownRegister(u8),

    #[error("Argument mismatch for {opcode}: expected [{}], found [{}]", join(.expected), join(.found))]
    ArgumentMismatch {
        opcode: Opcode,
        expected: Vec<ArgType>,
        found: Vec<ArgType>,
    },
}

fn join(types: &[ArgType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::UnknownRegister(0x20);
        assert_eq!(err.to_string(), "Unknown register: 0x20");

        let err = SpecError::ArgumentMismatch {
            opcode: Opcode::Mov,
            expected: vec![ArgType::RegisterRef, ArgType::RegisterRef],
            found: vec![],
        };
        assert_eq!(
            err.to_string(),
            "Argument mismatch for mov: expected [register, register], found []"
        );
    }
}
