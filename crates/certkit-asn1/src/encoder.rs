//! DER encoder.

use crate::tags;

/// A builder for DER-encoded ASN.1 data.
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consume the encoder and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Write a raw TLV with the given tag byte and content.
    pub fn write_tlv(&mut self, tag: u8, value: &[u8]) -> &mut Self {
        self.buf.push(tag);
        self.write_length(value.len());
        self.buf.extend_from_slice(value);
        self
    }

    /// Write a DER length: short form below 128, otherwise `0x80 | k`
    /// followed by the minimal big-endian byte representation.
    fn write_length(&mut self, length: usize) {
        if length < 0x80 {
            self.buf.push(length as u8);
            return;
        }
        let be = length.to_be_bytes();
        let skip = be.iter().take_while(|&&b| b == 0).count();
        let bytes = &be[skip..];
        self.buf.push(0x80 | bytes.len() as u8);
        self.buf.extend_from_slice(bytes);
    }

    /// Write an INTEGER from big-endian magnitude bytes, zero-padding
    /// when the high bit is set so the value stays positive.
    pub fn write_integer(&mut self, value: &[u8]) -> &mut Self {
        if !value.is_empty() && (value[0] & 0x80) != 0 {
            let mut padded = vec![0x00];
            padded.extend_from_slice(value);
            self.write_tlv(tags::INTEGER, &padded)
        } else {
            self.write_tlv(tags::INTEGER, value)
        }
    }

    /// Write a BOOLEAN.
    pub fn write_boolean(&mut self, value: bool) -> &mut Self {
        self.write_tlv(tags::BOOLEAN, &[if value { 0xFF } else { 0x00 }])
    }

    /// Write an OCTET STRING.
    pub fn write_octet_string(&mut self, value: &[u8]) -> &mut Self {
        self.write_tlv(tags::OCTET_STRING, value)
    }

    /// Write a BIT STRING. The unused-bits octet is always zero; this
    /// codec only wraps whole-byte payloads.
    pub fn write_bit_string(&mut self, value: &[u8]) -> &mut Self {
        let mut content = vec![0x00];
        content.extend_from_slice(value);
        self.write_tlv(tags::BIT_STRING, &content)
    }

    /// Write a SEQUENCE wrapping pre-encoded content.
    pub fn write_sequence(&mut self, content: &[u8]) -> &mut Self {
        self.write_tlv(tags::SEQUENCE, content)
    }

    /// Write a SET wrapping pre-encoded content, in caller order.
    /// DER's canonical SET sorting is not applied.
    pub fn write_set(&mut self, content: &[u8]) -> &mut Self {
        self.write_tlv(tags::SET, content)
    }

    /// Write a constructed context-specific element (`0xA0 | tag_num`).
    pub fn write_context_specific(&mut self, tag_num: u8, content: &[u8]) -> &mut Self {
        self.write_tlv(
            tags::CONTEXT_SPECIFIC | tags::CONSTRUCTED | (tag_num & 0x1F),
            content,
        )
    }

    /// Write a UTF8String.
    pub fn write_utf8_string(&mut self, s: &str) -> &mut Self {
        self.write_tlv(tags::UTF8_STRING, s.as_bytes())
    }

    /// Write bytes that are already DER-encoded.
    pub fn write_raw(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(data);
        self
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
