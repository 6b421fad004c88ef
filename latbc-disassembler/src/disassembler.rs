//! Main disassembler logic

use std::io::{BufRead, Write};

use latbc_spec::Header;
use crate::block::{read_block, Block};
use crate::config::Config;
use crate::error::{DisassemblerError, Result};
use crate::formatter::{format_block, format_header};
use crate::header::decode_header;
use crate::reader::ByteReader;

/// Block-by-block decoder over a whole file.
///
/// The header is decoded and its version checked on construction. Blocks are
/// then pulled with [`Disassembler::next_block`] or through `Iterator`.
pub struct Disassembler<R> {
    reader: ByteReader<R>,
    header: Header,
    config: Config,
    next_index: usize,
    finished: bool,
}

impl<R: BufRead> Disassembler<R> {
    pub fn new(source: R, config: Config) -> Result<Self> {
        let mut reader = ByteReader::new(source);
        let header = decode_header(&mut reader)?;

        if header.version != config.expected_version {
            return Err(DisassemblerError::VersionMismatch {
                expected: config.expected_version,
                found: header.version,
            });
        }

        Ok(Self {
            reader,
            header,
            config,
            next_index: 0,
            finished: false,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bytes consumed so far
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Decode the next block, or `None` once the input is cleanly exhausted.
    ///
    /// After an error or the end of input every further call returns `None`.
    pub fn next_block(&mut self) -> Result<Option<Block>> {
        if self.finished {
            return Ok(None);
        }

        match read_block(&mut self.reader, self.next_index, self.config.boundary) {
            Ok(Some(block)) => {
                self.next_index += 1;
                Ok(Some(block))
            }
            other => {
                self.finished = true;
                other
            }
        }
    }
}

impl<R: BufRead> Iterator for Disassembler<R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub blocks: usize,
    pub instructions: usize,
    pub bytes: u64,
}

/// Disassemble a whole file, streaming the listing into `out`.
///
/// Blocks already written stay in `out` when a later block fails to decode.
pub fn disassemble<R: BufRead, W: Write>(
    source: R,
    name: &str,
    config: &Config,
    out: &mut W,
) -> Result<Summary> {
    let mut disassembler = Disassembler::new(source, *config)?;
    out.write_all(format_header(name, disassembler.header()).as_bytes())?;

    let mut summary = Summary::default();
    while let Some(block) = disassembler.next_block()? {
        out.write_all(format_block(&block).as_bytes())?;
        summary.blocks += 1;
        summary.instructions += block.len();
    }
    out.flush()?;

    summary.bytes = disassembler.position();
    Ok(summary)
}

/// Disassemble an in-memory file with the default configuration
pub fn disassemble_bytes(bytes: &[u8], name: &str) -> Result<String> {
    let mut out = Vec::new();
    disassemble(bytes, name, &Config::DEFAULT, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
