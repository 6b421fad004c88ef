//! Decoded instruction representation

use crate::opcode::{ArgType, Opcode};
use crate::register::Register;
use crate::SpecError;
use std::fmt;

/// Reference to a nested method body, by index.
///
/// The index is opaque: the body it names is never resolved here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub index: u32,
}

impl MethodRef {
    pub const fn new(index: u32) -> Self {
        Self { index }
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<{}>>", self.index)
    }
}

/// A single decoded argument
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    /// Sign byte plus 4-byte magnitude, so wider than `i32`
    Integer(i64),
    /// Raw string contents, may contain NUL
    String(String),
    Register(Register),
    Method(MethodRef),
}

impl Arg {
    pub fn arg_type(&self) -> ArgType {
        match self {
            Arg::Integer(_) => ArgType::IntegerLiteral,
            Arg::String(_) => ArgType::StringLiteral,
            Arg::Register(_) => ArgType::RegisterRef,
            Arg::Method(_) => ArgType::MethodRef,
        }
    }
}

/// An opcode together with its arguments.
///
/// The argument list always matches [`Opcode::arg_types`] in length and
/// kind; the only way to build one is [`Instruction::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    args: Vec<Arg>,
}

impl Instruction {
    /// Build an instruction, checking the arguments against the opcode signature
    pub fn new(opcode: Opcode, args: Vec<Arg>) -> Result<Self, SpecError> {
        let expected = opcode.arg_types();
        let matches = args.len() == expected.len()
            && args.iter().zip(expected).all(|(arg, ty)| arg.arg_type() == *ty);

        if !matches {
            return Err(SpecError::ArgumentMismatch {
                opcode,
                expected: expected.to_vec(),
                found: args.iter().map(Arg::arg_type).collect(),
            });
        }

        Ok(Self { opcode, args })
    }

    #[inline]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn into_parts(self) -> (Opcode, Vec<Arg>) {
        (self.opcode, self.args)
    }
}
