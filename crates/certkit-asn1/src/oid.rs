//! Object identifier encoding and decoding.

use crate::{tags, DerError, Reader};

/// A parsed OID represented as a sequence of arc values.
///
/// DER packs the first two arcs into one byte (`40 * c0 + c1`, valid by
/// X.690 convention since c0 is 0..=2 and c1 < 40 below joint-iso); every
/// later arc is a base-128 varint with 0x80 continuation bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: Vec<u32>,
}

impl Oid {
    /// Create an OID from a slice of arc values.
    pub fn new(arcs: &[u32]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// Parse a dotted string such as `"2.5.29.35"`.
    pub fn parse(dotted: &str) -> Result<Self, DerError> {
        let arcs = dotted
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    DerError::InvalidOid(format!("component `{part}` is not a non-negative integer"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if arcs.len() < 2 {
            return Err(DerError::InvalidOid(format!(
                "`{dotted}` has fewer than 2 components"
            )));
        }
        Ok(Self { arcs })
    }

    /// Return the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Encode the OID value bytes (no tag or length).
    pub fn to_der_value(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        if self.arcs.len() >= 2 {
            buf.push((self.arcs[0] * 40 + self.arcs[1]) as u8);
            for &arc in &self.arcs[2..] {
                encode_arc(&mut buf, arc);
            }
        }
        buf
    }

    /// Encode the full TLV: tag 0x06, a single-byte length, the body.
    ///
    /// Bodies longer than 127 bytes are rejected rather than promoted to
    /// the long length form; no real-world OID comes close.
    pub fn to_der(&self) -> Result<Vec<u8>, DerError> {
        if self.arcs.len() < 2 {
            return Err(DerError::InvalidOid(format!(
                "{} component(s), at least 2 required",
                self.arcs.len()
            )));
        }
        let body = self.to_der_value();
        if body.len() > 0x7F {
            return Err(DerError::InvalidOid(format!(
                "encoded body is {} bytes, single-byte length holds at most 127",
                body.len()
            )));
        }
        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(tags::OID);
        out.push(body.len() as u8);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Parse an OID from a full TLV (leading tag must be 0x06).
    pub fn from_der(bytes: &[u8]) -> Result<Self, DerError> {
        let mut reader = Reader::new(bytes);
        Self::from_der_value(reader.read_oid()?)
    }

    /// Parse an OID from bare value bytes.
    pub fn from_der_value(data: &[u8]) -> Result<Self, DerError> {
        let Some(&first) = data.first() else {
            return Err(DerError::InvalidOid("empty body".into()));
        };
        let mut arcs = vec![first as u32 / 40, first as u32 % 40];
        let mut i = 1;
        while i < data.len() {
            let (arc, consumed) = decode_arc(&data[i..])?;
            arcs.push(arc);
            i += consumed;
        }
        Ok(Self { arcs })
    }

    /// Return the dotted-string representation (e.g., `"1.2.840.113549.1.1.11"`).
    pub fn to_dot_string(&self) -> String {
        self.arcs
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot_string())
    }
}

fn encode_arc(buf: &mut Vec<u8>, mut value: u32) {
    if value < 0x80 {
        buf.push(value as u8);
        return;
    }
    let mut bytes = Vec::new();
    while value > 0 {
        bytes.push((value & 0x7F) as u8);
        value >>= 7;
    }
    bytes.reverse();
    for (i, b) in bytes.iter().enumerate() {
        if i < bytes.len() - 1 {
            buf.push(b | 0x80);
        } else {
            buf.push(*b);
        }
    }
}

fn decode_arc(data: &[u8]) -> Result<(u32, usize), DerError> {
    let mut value: u32 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if value > u32::MAX >> 7 {
            return Err(DerError::InvalidOid("component overflow".into()));
        }
        value = (value << 7) | (byte & 0x7F) as u32;
        if (byte & 0x80) == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(DerError::InvalidOid(
        "truncated base-128 component".into(),
    ))
}

/// Well-known OIDs.
pub mod known {
    use super::Oid;

    /// X.509 Authority Key Identifier extension (RFC 5280 §4.2.1.1).
    pub fn authority_key_identifier() -> Oid {
        Oid::new(&[2, 5, 29, 35])
    }
}
