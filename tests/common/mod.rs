//! Byte fixture builder shared by the end-to-end tests

#![allow(dead_code)]

use latbc_spec::{Arg, Instruction, VERSION};

/// Builds compiled files byte by byte
#[derive(Default)]
pub struct FileBuilder {
    bytes: Vec<u8>,
}

impl FileBuilder {
    /// Start a file with the given header version
    pub fn with_version(version: i64) -> Self {
        let mut builder = Self::default();
        builder.signed(version);
        builder
    }

    pub fn new() -> Self {
        Self::with_version(VERSION)
    }

    pub fn signed(&mut self, value: i64) -> &mut Self {
        self.bytes.push(u8::from(value < 0));
        self.magnitude(value.unsigned_abs(), 4)
    }

    pub fn magnitude(&mut self, value: u64, width: usize) -> &mut Self {
        self.bytes.extend((0..width).map(|i| (value >> (8 * i)) as u8));
        self
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        for &b in s.as_bytes() {
            if b == 0 {
                self.bytes.extend_from_slice(&[0x00, b'.']);
            } else {
                self.bytes.push(b);
            }
        }
        self.bytes.extend_from_slice(&[0x00, 0x00]);
        self
    }

    pub fn field(&mut self, tag: u8, value: &str) -> &mut Self {
        self.bytes.extend_from_slice(&[tag, b'$']);
        self.string(value)
    }

    pub fn end_header(&mut self) -> &mut Self {
        self.bytes.extend_from_slice(&[b'.', 0x00]);
        self
    }

    /// Append a block whose length prefix matches its encoded instructions
    pub fn block(&mut self, instructions: &[Instruction]) -> &mut Self {
        let body = encode_all(instructions);
        self.raw_block(body.len() as u64, &body)
    }

    /// Append a block with an arbitrary declared length
    pub fn raw_block(&mut self, declared: u64, body: &[u8]) -> &mut Self {
        self.magnitude(declared, 8);
        self.raw(body)
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Encode instructions the way the compiler lays them out
pub fn encode_all(instructions: &[Instruction]) -> Vec<u8> {
    let mut builder = FileBuilder::default();
    for instr in instructions {
        builder.raw(&[instr.opcode().to_u8()]);
        for arg in instr.args() {
            match arg {
                Arg::Integer(v) => builder.signed(*v),
                Arg::String(s) => builder.string(s),
                Arg::Register(r) => builder.raw(&[r.to_u8()]),
                Arg::Method(m) => builder.magnitude(u64::from(m.index), 4),
            };
        }
    }
    builder.build()
}
