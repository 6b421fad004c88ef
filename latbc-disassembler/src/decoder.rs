//! Instruction decoder

use std::io::BufRead;

use latbc_spec::{Arg, ArgType, Instruction, INT_WIDTH};
use crate::error::Result;
use crate::reader::ByteReader;

/// Decode one instruction: an opcode byte followed by its declared arguments
pub fn decode_instruction<R: BufRead>(reader: &mut ByteReader<R>) -> Result<Instruction> {
    let offset = reader.position();
    let opcode = reader.read_opcode()?;

    let args = opcode
        .arg_types()
        .iter()
        .map(|&ty| decode_arg(reader, ty))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(offset, %opcode, args = args.len(), "Decoded instruction");

    Ok(Instruction::new(opcode, args)?)
}

/// Decode a single argument of the given kind
pub fn decode_arg<R: BufRead>(reader: &mut ByteReader<R>, ty: ArgType) -> Result<Arg> {
    Ok(match ty {
        ArgType::IntegerLiteral => Arg::Integer(reader.read_signed(INT_WIDTH)?),
        ArgType::StringLiteral => Arg::String(reader.read_string()?),
        ArgType::RegisterRef => Arg::Register(reader.read_register()?),
        ArgType::MethodRef => Arg::Method(reader.read_method_ref()?),
    })
}
