//! Register definitions for the Latitude VM

use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 30;

/// VM register, encoded as a single byte (0x01-0x1E)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    Ptr = 0x01,   // object pointer
    Slf = 0x02,   // self
    Ret = 0x03,   // return value
    Lex = 0x04,   // lexical scope
    Dyn = 0x05,   // dynamic scope
    Arg = 0x06,   // argument stack
    Sto = 0x07,   // storage stack
    Cont = 0x08,  // continuation
    Stack = 0x09, // call stack
    Err0 = 0x0A,
    Err1 = 0x0B,
    Sym = 0x0C,
    Num0 = 0x0D,
    Num1 = 0x0E,
    Str0 = 0x0F,
    Str1 = 0x10,
    Mthd = 0x11,
    Cpp = 0x12,
    Strm = 0x13,
    Prcs = 0x14,
    Mthdz = 0x15,
    Flag = 0x16,
    Wind = 0x17,
    Hand = 0x18,
    Line = 0x19,
    File = 0x1A,
    Trace = 0x1B,
    Trns = 0x1C,
    Lit = 0x1D,   // literal table (read-only)
    Gtu = 0x1E,
}

impl Register {
    /// All registers in encoding order
    pub const ALL: [Register; NUM_REGISTERS] = [
        Self::Ptr, Self::Slf, Self::Ret, Self::Lex, Self::Dyn, Self::Arg,
        Self::Sto, Self::Cont, Self::Stack, Self::Err0, Self::Err1, Self::Sym,
        Self::Num0, Self::Num1, Self::Str0, Self::Str1, Self::Mthd, Self::Cpp,
        Self::Strm, Self::Prcs, Self::Mthdz, Self::Flag, Self::Wind, Self::Hand,
        Self::Line, Self::File, Self::Trace, Self::Trns, Self::Lit, Self::Gtu,
    ];

    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01..=0x1E => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Symbolic name as it appears in listings (e.g. `%ret`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Ptr => "%ptr",
            Self::Slf => "%slf",
            Self::Ret => "%ret",
            Self::Lex => "%lex",
            Self::Dyn => "%dyn",
            Self::Arg => "%arg",
            Self::Sto => "%sto",
            Self::Cont => "%cont",
            Self::Stack => "%stack",
            Self::Err0 => "%err0",
            Self::Err1 => "%err1",
            Self::Sym => "%sym",
            Self::Num0 => "%num0",
            Self::Num1 => "%num1",
            Self::Str0 => "%str0",
            Self::Str1 => "%str1",
            Self::Mthd => "%mthd",
            Self::Cpp => "%cpp",
            Self::Strm => "%strm",
            Self::Prcs => "%prcs",
            Self::Mthdz => "%mthdz",
            Self::Flag => "%flag",
            Self::Wind => "%wind",
            Self::Hand => "%hand",
            Self::Line => "%line",
            Self::File => "%file",
            Self::Trace => "%trace",
            Self::Trns => "%trns",
            Self::Lit => "%lit",
            Self::Gtu => "%gtu",
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = crate::SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(crate::SpecError::UnknownRegister(value))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
