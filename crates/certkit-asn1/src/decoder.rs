//! Forward-only DER reader and sequence walking.

use crate::{tags, DerError, Tag, Tlv};

/// Parse a DER length field at `offset`.
///
/// Returns the content length and the number of bytes the length field
/// occupies, counting the leading size-indicator byte.
pub(crate) fn read_length_at(data: &[u8], offset: usize) -> Result<(usize, usize), DerError> {
    let Some(&first) = data.get(offset) else {
        return Err(DerError::Bounds {
            offset,
            len: data.len(),
        });
    };
    if first < 0x80 {
        return Ok((first as usize, 1));
    }
    let k = (first & 0x7F) as usize;
    // k == 0 is the indefinite form, which DER forbids
    if k == 0 || k > 4 {
        return Err(DerError::MalformedLength);
    }
    if offset + 1 + k > data.len() {
        return Err(DerError::Bounds {
            offset: offset + 1 + k,
            len: data.len(),
        });
    }
    let mut length: usize = 0;
    for i in 0..k {
        length = (length << 8) | data[offset + 1 + i] as usize;
    }
    Ok((length, 1 + k))
}

/// A forward-only DER reader over a borrowed buffer.
///
/// The cursor advances only when a read succeeds; a failed read leaves the
/// reader where it was.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true once all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn bounds(&self, offset: usize) -> DerError {
        DerError::Bounds {
            offset,
            len: self.data.len(),
        }
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Result<Tag, DerError> {
        if self.is_empty() {
            return Err(self.bounds(self.pos));
        }
        let (tag, _) = Tag::from_bytes(self.remaining())?;
        Ok(tag)
    }

    /// Read the next TLV element.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, DerError> {
        let start = self.pos;
        if self.is_empty() {
            return Err(self.bounds(start));
        }
        let (tag, tag_len) = Tag::from_bytes(self.remaining())?;
        let (length, len_len) = read_length_at(self.data, start + tag_len)?;
        let header = tag_len + len_len;
        let end = start + header + length;
        if end > self.data.len() {
            return Err(self.bounds(end));
        }
        let raw = &self.data[start..end];
        self.pos = end;
        Ok(Tlv {
            tag,
            raw,
            value: &raw[header..],
        })
    }

    /// Read the next TLV and require its leading tag byte.
    fn read_expected(&mut self, expected: u8) -> Result<Tlv<'a>, DerError> {
        let start = self.pos;
        let tlv = self.read_tlv()?;
        if tlv.raw[0] != expected {
            self.pos = start;
            return Err(DerError::UnexpectedTag {
                expected,
                found: tlv.raw[0],
            });
        }
        Ok(tlv)
    }

    /// Read an INTEGER and return its content bytes
    /// (big-endian, may include a leading zero).
    pub fn read_integer(&mut self) -> Result<&'a [u8], DerError> {
        Ok(self.read_expected(tags::INTEGER)?.value)
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> Result<&'a [u8], DerError> {
        Ok(self.read_expected(tags::OCTET_STRING)?.value)
    }

    /// Read an OID and return its raw value bytes.
    pub fn read_oid(&mut self) -> Result<&'a [u8], DerError> {
        Ok(self.read_expected(tags::OID)?.value)
    }

    /// Read a BOOLEAN (DER: 0x00 = false, anything else = true).
    pub fn read_boolean(&mut self) -> Result<bool, DerError> {
        let start = self.pos;
        let tlv = self.read_expected(tags::BOOLEAN)?;
        if tlv.value.len() != 1 {
            self.pos = start;
            return Err(DerError::MalformedLength);
        }
        Ok(tlv.value[0] != 0x00)
    }

    /// Read a SEQUENCE, returning a sub-reader over its content.
    pub fn read_sequence(&mut self) -> Result<Reader<'a>, DerError> {
        Ok(Reader::new(self.read_expected(tags::SEQUENCE)?.value))
    }

    /// Read a constructed context-specific element with the given number.
    pub fn read_context_specific(&mut self, tag_num: u8) -> Result<Tlv<'a>, DerError> {
        self.read_expected(tags::CONTEXT_SPECIFIC | tags::CONSTRUCTED | (tag_num & 0x1F))
    }
}

/// Require `buf` to be a SEQUENCE and return its content region.
pub fn unwrap_sequence(buf: &[u8]) -> Result<&[u8], DerError> {
    let mut reader = Reader::new(buf);
    Ok(reader.read_expected(tags::SEQUENCE)?.value)
}

/// Split a SEQUENCE content region into its ordered child elements.
///
/// Each slice spans a whole child (tag byte included). An empty region
/// yields an empty list; a child that overruns the region is an error.
pub fn split_sequence_parts(content: &[u8]) -> Result<Vec<&[u8]>, DerError> {
    let mut reader = Reader::new(content);
    let mut parts = Vec::new();
    while !reader.is_empty() {
        parts.push(reader.read_tlv()?.raw);
    }
    Ok(parts)
}
