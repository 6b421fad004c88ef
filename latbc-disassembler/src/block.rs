//! Length-framed instruction blocks

use std::io::BufRead;

use latbc_spec::{Instruction, BLOCK_LEN_WIDTH};
use crate::config::BoundaryMode;
use crate::decoder::decode_instruction;
use crate::error::{DisassemblerError, Result};
use crate::reader::ByteReader;

/// A run of instructions framed by a byte-length prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Sequence number within the file, from 0
    pub index: usize,
    /// Offset of the length prefix
    pub offset: u64,
    /// Byte length announced by the prefix
    pub declared_len: u64,
    /// Bytes actually taken by the decoded instructions
    pub consumed: u64,
    pub instructions: Vec<Instruction>,
}

impl Block {
    /// Bytes decoded past the declared length
    pub fn overrun(&self) -> u64 {
        self.consumed.saturating_sub(self.declared_len)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Read the next block.
///
/// Returns `Ok(None)` when the input ends exactly where a length prefix would
/// start. Running out of input anywhere later is an error.
///
/// The boundary is checked between instructions only, so the last
/// instruction may run past the declared length. `BoundaryMode::Strict`
/// turns that into [`DisassemblerError::BlockOverrun`].
pub fn read_block<R: BufRead>(
    reader: &mut ByteReader<R>,
    index: usize,
    boundary: BoundaryMode,
) -> Result<Option<Block>> {
    if reader.is_exhausted()? {
        return Ok(None);
    }

    let offset = reader.position();
    let declared_len = reader.read_unsigned(BLOCK_LEN_WIDTH)?;
    let start = reader.position();
    let end = start.saturating_add(declared_len);

    tracing::debug!(index, offset, declared_len, "Reading block");

    let mut instructions = Vec::new();
    while reader.position() < end {
        instructions.push(decode_instruction(reader)?);
    }

    let block = Block {
        index,
        offset,
        declared_len,
        consumed: reader.position() - start,
        instructions,
    };

    if block.overrun() > 0 {
        match boundary {
            BoundaryMode::Lax => {
                tracing::warn!(
                    index,
                    declared = block.declared_len,
                    consumed = block.consumed,
                    "Block instructions run past the declared length"
                );
            }
            BoundaryMode::Strict => {
                return Err(DisassemblerError::BlockOverrun {
                    index,
                    declared: block.declared_len,
                    consumed: block.consumed,
                });
            }
        }
    }

    Ok(Some(block))
}
