//! Primitive readers over a forward-only byte source
//!
//! All multi-byte integers are stored as a little-endian magnitude. Signed
//! values carry one extra leading sign byte (nonzero means negative).

use std::io::{self, BufRead};

use latbc_spec::{MethodRef, Opcode, Register, METHOD_WIDTH, STRING_NUL_ESCAPE};
use crate::error::{DisassemblerError, Result};

/// Cursor over a buffered byte stream that tracks its absolute offset
pub struct ByteReader<R> {
    inner: R,
    position: u64,
}

impl<R: BufRead> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Offset of the next byte to be read
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// True when no further byte can be read. Does not consume input.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.is_empty()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        match self.inner.read_exact(&mut byte) {
            Ok(()) => {
                self.position += 1;
                Ok(byte[0])
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(DisassemblerError::EndOfStream { offset: self.position })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read `length` magnitude bytes, least significant first
    pub fn read_unsigned(&mut self, length: usize) -> Result<u64> {
        if length > 8 {
            return Err(DisassemblerError::IntegerOverflow {
                length,
                offset: self.position,
            });
        }

        let mut value = 0u64;
        for i in 0..length {
            value |= u64::from(self.read_byte()?) << (8 * i);
        }
        Ok(value)
    }

    /// Read a sign byte followed by `length` magnitude bytes
    pub fn read_signed(&mut self, length: usize) -> Result<i64> {
        let offset = self.position;
        let negative = self.read_byte()? != 0;
        let magnitude = self.read_unsigned(length)?;
        let magnitude = i64::try_from(magnitude)
            .map_err(|_| DisassemblerError::IntegerOverflow { length, offset })?;

        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Read a `00 00`-terminated string, where `00 2E` encodes a NUL byte.
    ///
    /// A NUL followed by any other byte drops both bytes and keeps reading.
    pub fn read_string(&mut self) -> Result<String> {
        let offset = self.position;
        let mut buf = Vec::new();

        loop {
            match self.read_byte()? {
                0 => match self.read_byte()? {
                    0 => break,
                    STRING_NUL_ESCAPE => buf.push(0),
                    other => {
                        tracing::warn!(
                            offset = self.position - 1,
                            byte = other,
                            "Ignoring unrecognised escape in string literal"
                        );
                    }
                },
                byte => buf.push(byte),
            }
        }

        String::from_utf8(buf).map_err(|_| DisassemblerError::InvalidUtf8 { offset })
    }

    pub fn read_register(&mut self) -> Result<Register> {
        let offset = self.position;
        let register = self.read_byte()?;
        Register::from_u8(register)
            .ok_or(DisassemblerError::UnknownRegister { register, offset })
    }

    pub fn read_opcode(&mut self) -> Result<Opcode> {
        let offset = self.position;
        let opcode = self.read_byte()?;
        Opcode::from_u8(opcode).ok_or(DisassemblerError::UnknownOpcode { opcode, offset })
    }

    pub fn read_method_ref(&mut self) -> Result<MethodRef> {
        let index = self.read_unsigned(METHOD_WIDTH)?;
        Ok(MethodRef::new(index as u32))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
