//! File header decoder

use std::io::BufRead;

use latbc_spec::{
    Header, INT_WIDTH, NATURE_INTEGER, NATURE_STRING, TAG_END, TAG_MODULE, TAG_PACKAGE,
};
use crate::error::{DisassemblerError, Result};
use crate::reader::ByteReader;

/// Header field selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTag {
    Module,
    Package,
    End,
}

impl TryFrom<u8> for HeaderTag {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            TAG_MODULE => Ok(HeaderTag::Module),
            TAG_PACKAGE => Ok(HeaderTag::Package),
            TAG_END => Ok(HeaderTag::End),
            other => Err(other),
        }
    }
}

/// Encoding of a header field value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nature {
    Integer,
    String,
}

impl TryFrom<u8> for Nature {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            NATURE_INTEGER => Ok(Nature::Integer),
            NATURE_STRING => Ok(Nature::String),
            other => Err(other),
        }
    }
}

/// A header field value before it is assigned to a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckedValue {
    Integer(i64),
    String(String),
}

/// Read a nature byte and the value it announces
pub fn read_checked<R: BufRead>(reader: &mut ByteReader<R>) -> Result<CheckedValue> {
    let offset = reader.position();
    let nature = reader.read_byte()?;

    match Nature::try_from(nature) {
        Ok(Nature::Integer) => Ok(CheckedValue::Integer(reader.read_signed(INT_WIDTH)?)),
        Ok(Nature::String) => Ok(CheckedValue::String(reader.read_string()?)),
        Err(nature) => Err(DisassemblerError::UnknownCheckedNature { nature, offset }),
    }
}

/// Decode the file header, up to and including the sentinel byte.
///
/// The version is not checked here.
pub fn decode_header<R: BufRead>(reader: &mut ByteReader<R>) -> Result<Header> {
    let version = reader.read_signed(INT_WIDTH)?;
    let mut header = Header::new(version);

    loop {
        let offset = reader.position();
        let byte = reader.read_byte()?;

        let tag = match HeaderTag::try_from(byte) {
            Ok(HeaderTag::End) => {
                // Sentinel byte after the terminator carries no information
                reader.read_byte()?;
                break;
            }
            other => other,
        };

        let value = read_checked(reader)?;
        let slot = match tag {
            Ok(HeaderTag::Module) => &mut header.module_name,
            Ok(HeaderTag::Package) => &mut header.package_name,
            _ => return Err(DisassemblerError::UnknownHeaderTag { tag: byte, offset }),
        };

        match value {
            CheckedValue::String(s) => *slot = Some(s),
            CheckedValue::Integer(_) => {
                return Err(DisassemblerError::HeaderTypeMismatch { tag: byte })
            }
        }
    }

    tracing::debug!(
        version = header.version,
        module = ?header.module_name,
        package = ?header.package_name,
        "Decoded header"
    );

    Ok(header)
}
