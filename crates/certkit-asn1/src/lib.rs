#![forbid(unsafe_code)]
#![doc = "Minimal ASN.1 DER codec: primitives, a forward-only reader, and sequence walking."]

mod decoder;
mod encoder;
mod error;
mod tag;

pub mod oid;

pub use decoder::{split_sequence_parts, unwrap_sequence, Reader};
pub use encoder::Encoder;
pub use error::DerError;

/// ASN.1 tag constants.
pub mod tags {
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const OID: u8 = 0x06;
    pub const UTF8_STRING: u8 = 0x0C;
    pub const SEQUENCE: u8 = 0x30;
    pub const SET: u8 = 0x31;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const CONSTRUCTED: u8 = 0x20;
}

/// A parsed ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u32,
}

/// ASN.1 tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// A borrowed ASN.1 TLV element.
///
/// `raw` spans the whole element (tag, length field, and content) so a
/// caller holding a child slice can re-inspect its tag; `value` is the
/// content alone. Both borrow from the source buffer.
#[derive(Debug, Clone)]
pub struct Tlv<'a> {
    pub tag: Tag,
    pub raw: &'a [u8],
    pub value: &'a [u8],
}
