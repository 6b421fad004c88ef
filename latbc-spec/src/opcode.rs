//! # Latitude Opcode Definitions
//!
//! Every instruction starts with a single opcode byte (0x01-0x36). The opcode
//! fixes the mnemonic and the ordered argument signature that follows it in
//! the byte stream.
//!
//! ## Argument Encodings
//!
//! - `int`: sign byte, then 4 magnitude bytes (least significant first)
//! - `"str"`: raw bytes, `00 2E` for an embedded NUL, terminated by `00 00`
//! - `reg`: one register byte
//! - `method`: 4 magnitude bytes, no sign byte

use std::fmt;

/// Kind of a single instruction argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgType {
    IntegerLiteral,
    StringLiteral,
    RegisterRef,
    MethodRef,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgType::IntegerLiteral => "integer",
            ArgType::StringLiteral => "string",
            ArgType::RegisterRef => "register",
            ArgType::MethodRef => "method",
        };
        f.write_str(name)
    }
}

const NONE: &[ArgType] = &[];
const REG: &[ArgType] = &[ArgType::RegisterRef];
const REG_REG: &[ArgType] = &[ArgType::RegisterRef, ArgType::RegisterRef];
const STR: &[ArgType] = &[ArgType::StringLiteral];
const STR_STR: &[ArgType] = &[ArgType::StringLiteral, ArgType::StringLiteral];
const INT: &[ArgType] = &[ArgType::IntegerLiteral];
const INT_REG: &[ArgType] = &[ArgType::IntegerLiteral, ArgType::RegisterRef];
const METHOD: &[ArgType] = &[ArgType::MethodRef];

/// Number of opcodes in the instruction table
pub const NUM_OPCODES: usize = 54;

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// MOV reg, reg
    Mov = 0x01,
    /// PUSH reg, reg
    Push = 0x02,
    /// POP reg, reg
    Pop = 0x03,
    /// GETL reg
    Getl = 0x04,
    /// GETD reg
    Getd = 0x05,
    /// ESWAP
    Eswap = 0x06,
    /// ECLR
    Eclr = 0x07,
    /// ESET
    Eset = 0x08,
    /// SYM "str"
    Sym = 0x09,
    /// NUM "str"
    Num = 0x0A,
    /// INT int
    Int = 0x0B,
    /// FLOAT "str"
    Float = 0x0C,
    /// NSWAP
    Nswap = 0x0D,
    /// CALL int
    Call = 0x0E,
    /// XCALL
    Xcall = 0x0F,
    /// XCALL0 int
    Xcall0 = 0x10,
    /// RET
    Ret = 0x11,
    /// CLONE
    Clone = 0x12,
    /// RTRV
    Rtrv = 0x13,
    /// RTRVD
    Rtrvd = 0x14,
    /// STR "str"
    Str = 0x15,
    /// SSWAP
    Sswap = 0x16,
    /// EXPD reg
    Expd = 0x17,
    /// MTHD method
    Mthd = 0x18,
    /// LOAD reg
    Load = 0x19,
    /// SETF
    Setf = 0x1A,
    /// PEEK reg, reg
    Peek = 0x1B,
    /// SYMN "str"
    Symn = 0x1C,
    /// CPP int
    Cpp = 0x1D,
    /// BOL
    Bol = 0x1E,
    /// TEST
    Test = 0x1F,
    /// BRANCH
    Branch = 0x20,
    /// CCALL
    Ccall = 0x21,
    /// CGOTO
    Cgoto = 0x22,
    /// CRET
    Cret = 0x23,
    /// WND
    Wnd = 0x24,
    /// UNWND
    Unwnd = 0x25,
    /// THROW
    Throw = 0x26,
    /// THROQ
    Throq = 0x27,
    /// ADDS
    Adds = 0x28,
    /// ARITH int
    Arith = 0x29,
    /// THROA "str"
    Throa = 0x2A,
    /// LOCFN "str"
    Locfn = 0x2B,
    /// LOCLN int
    Locln = 0x2C,
    /// LOCRT
    Locrt = 0x2D,
    /// NRET
    Nret = 0x2E,
    /// UNTR
    Untr = 0x2F,
    /// CMPLX "str", "str"
    Cmplx = 0x30,
    /// YLD int, reg
    Yld = 0x31,
    /// YLDC int, reg
    Yldc = 0x32,
    /// DEL
    Del = 0x33,
    /// ARR int
    Arr = 0x34,
    /// DICT int
    Dict = 0x35,
    /// XXX int
    Xxx = 0x36,
}

impl Opcode {
    /// All opcodes in encoding order
    pub const ALL: [Opcode; NUM_OPCODES] = [
        Opcode::Mov,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Getl,
        Opcode::Getd,
        Opcode::Eswap,
        Opcode::Eclr,
        Opcode::Eset,
        Opcode::Sym,
        Opcode::Num,
        Opcode::Int,
        Opcode::Float,
        Opcode::Nswap,
        Opcode::Call,
        Opcode::Xcall,
        Opcode::Xcall0,
        Opcode::Ret,
        Opcode::Clone,
        Opcode::Rtrv,
        Opcode::Rtrvd,
        Opcode::Str,
        Opcode::Sswap,
        Opcode::Expd,
        Opcode::Mthd,
        Opcode::Load,
        Opcode::Setf,
        Opcode::Peek,
        Opcode::Symn,
        Opcode::Cpp,
        Opcode::Bol,
        Opcode::Test,
        Opcode::Branch,
        Opcode::Ccall,
        Opcode::Cgoto,
        Opcode::Cret,
        Opcode::Wnd,
        Opcode::Unwnd,
        Opcode::Throw,
        Opcode::Throq,
        Opcode::Adds,
        Opcode::Arith,
        Opcode::Throa,
        Opcode::Locfn,
        Opcode::Locln,
        Opcode::Locrt,
        Opcode::Nret,
        Opcode::Untr,
        Opcode::Cmplx,
        Opcode::Yld,
        Opcode::Yldc,
        Opcode::Del,
        Opcode::Arr,
        Opcode::Dict,
        Opcode::Xxx,    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Opcode::Mov),
            0x02 => Some(Opcode::Push),
            0x03 => Some(Opcode::Pop),
            0x04 => Some(Opcode::Getl),
            0x05 => Some(Opcode::Getd),
            0x06 => Some(Opcode::Eswap),
            0x07 => Some(Opcode::Eclr),
            0x08 => Some(Opcode::Eset),
            0x09 => Some(Opcode::Sym),
            0x0A => Some(Opcode::Num),
            0x0B => Some(Opcode::Int),
            0x0C => Some(Opcode::Float),
            0x0D => Some(Opcode::Nswap),
            0x0E => Some(Opcode::Call),
            0x0F => Some(Opcode::Xcall),
            0x10 => Some(Opcode::Xcall0),
            0x11 => Some(Opcode::Ret),
            0x12 => Some(Opcode::Clone),
            0x13 => Some(Opcode::Rtrv),
            0x14 => Some(Opcode::Rtrvd),
            0x15 => Some(Opcode::Str),
            0x16 => Some(Opcode::Sswap),
            0x17 => Some(Opcode::Expd),
            0x18 => Some(Opcode::Mthd),
            0x19 => Some(Opcode::Load),
            0x1A => Some(Opcode::Setf),
            0x1B => Some(Opcode::Peek),
            0x1C => Some(Opcode::Symn),
            0x1D => Some(Opcode::Cpp),
            0x1E => Some(Opcode::Bol),
            0x1F => Some(Opcode::Test),
            0x20 => Some(Opcode::Branch),
            0x21 => Some(Opcode::Ccall),
            0x22 => Some(Opcode::Cgoto),
            0x23 => Some(Opcode::Cret),
            0x24 => Some(Opcode::Wnd),
            0x25 => Some(Opcode::Unwnd),
            0x26 => Some(Opcode::Throw),
            0x27 => Some(Opcode::Throq),
            0x28 => Some(Opcode::Adds),
            0x29 => Some(Opcode::Arith),
            0x2A => Some(Opcode::Throa),
            0x2B => Some(Opcode::Locfn),
            0x2C => Some(Opcode::Locln),
            0x2D => Some(Opcode::Locrt),
            0x2E => Some(Opcode::Nret),
            0x2F => Some(Opcode::Untr),
            0x30 => Some(Opcode::Cmplx),
            0x31 => Some(Opcode::Yld),
            0x32 => Some(Opcode::Yldc),
            0x33 => Some(Opcode::Del),
            0x34 => Some(Opcode::Arr),
            0x35 => Some(Opcode::Dict),
            0x36 => Some(Opcode::Xxx),            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Mnemonic used in listings
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Mov => "mov",
            Opcode::Push => "push",
            Opcode::Pop => "pop",
            Opcode::Getl => "getl",
            Opcode::Getd => "getd",
            Opcode::Eswap => "eswap",
            Opcode::Eclr => "eclr",
            Opcode::Eset => "eset",
            Opcode::Sym => "sym",
            Opcode::Num => "num",
            Opcode::Int => "int",
            Opcode::Float => "float",
            Opcode::Nswap => "nswap",
            Opcode::Call => "call",
            Opcode::Xcall => "xcall",
            Opcode::Xcall0 => "xcall0",
            Opcode::Ret => "ret",
            Opcode::Clone => "clone",
            Opcode::Rtrv => "rtrv",
            Opcode::Rtrvd => "rtrvd",
            Opcode::Str => "str",
            Opcode::Sswap => "sswap",
            Opcode::Expd => "expd",
            Opcode::Mthd => "mthd",
            Opcode::Load => "load",
            Opcode::Setf => "setf",
            Opcode::Peek => "peek",
            Opcode::Symn => "symn",
            Opcode::Cpp => "cpp",
            Opcode::Bol => "bol",
            Opcode::Test => "test",
            Opcode::Branch => "branch",
            Opcode::Ccall => "ccall",
            Opcode::Cgoto => "cgoto",
            Opcode::Cret => "cret",
            Opcode::Wnd => "wnd",
            Opcode::Unwnd => "unwnd",
            Opcode::Throw => "throw",
            Opcode::Throq => "throq",
            Opcode::Adds => "adds",
            Opcode::Arith => "arith",
            Opcode::Throa => "throa",
            Opcode::Locfn => "locfn",
            Opcode::Locln => "locln",
            Opcode::Locrt => "locrt",
            Opcode::Nret => "nret",
            Opcode::Untr => "untr",
            Opcode::Cmplx => "cmplx",
            Opcode::Yld => "yld",
            Opcode::Yldc => "yldc",
            Opcode::Del => "del",
            Opcode::Arr => "arr",
            Opcode::Dict => "dict",
            Opcode::Xxx => "xxx",        }
    }

    /// Ordered argument signature
    pub fn arg_types(self) -> &'static [ArgType] {
        match self {
            Opcode::Mov
            | Opcode::Push
            | Opcode::Pop
            | Opcode::Peek => REG_REG,
            Opcode::Getl
            | Opcode::Getd
            | Opcode::Expd
            | Opcode::Load => REG,
            Opcode::Eswap
            | Opcode::Eclr
            | Opcode::Eset
            | Opcode::Nswap
            | Opcode::Xcall
            | Opcode::Ret
            | Opcode::Clone
            | Opcode::Rtrv
            | Opcode::Rtrvd
            | Opcode::Sswap
            | Opcode::Setf
            | Opcode::Bol
            | Opcode::Test
            | Opcode::Branch
            | Opcode::Ccall
            | Opcode::Cgoto
            | Opcode::Cret
            | Opcode::Wnd
            | Opcode::Unwnd
            | Opcode::Throw
            | Opcode::Throq
            | Opcode::Adds
            | Opcode::Locrt
            | Opcode::Nret
            | Opcode::Untr
            | Opcode::Del => NONE,
            Opcode::Sym
            | Opcode::Num
            | Opcode::Float
            | Opcode::Str
            | Opcode::Symn
            | Opcode::Throa
            | Opcode::Locfn => STR,
            Opcode::Int
            | Opcode::Call
            | Opcode::Xcall0
            | Opcode::Cpp
            | Opcode::Arith
            | Opcode::Locln
            | Opcode::Arr
            | Opcode::Dict
            | Opcode::Xxx => INT,
            Opcode::Mthd => METHOD,
            Opcode::Cmplx => STR_STR,
            Opcode::Yld
            | Opcode::Yldc => INT_REG,        }
    }

    /// Number of arguments following the opcode byte
    #[inline]
    pub fn arity(self) -> usize {
        self.arg_types().len()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = crate::SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(crate::SpecError::UnknownOpcode(value))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_from_u8_matches_table(byte in any::<u8>()) {
            match Opcode::from_u8(byte) {
                Some(op) => prop_assert_eq!(op.to_u8(), byte),
                None => prop_assert!(byte == 0 || byte as usize > NUM_OPCODES),
            }
        }
    }
}
