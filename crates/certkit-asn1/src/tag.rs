//! ASN.1 tag parsing.

use crate::{DerError, Tag, TagClass};

impl Tag {
    /// Parse a tag from the first bytes of `input`.
    /// Returns the tag and the number of bytes consumed.
    pub fn from_bytes(input: &[u8]) -> Result<(Self, usize), DerError> {
        let Some(&first) = input.first() else {
            return Err(DerError::Bounds {
                offset: 0,
                len: input.len(),
            });
        };

        let class = match (first >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        };
        let constructed = (first & 0x20) != 0;

        let low_bits = first & 0x1F;
        if low_bits < 0x1F {
            // Short form tag number
            return Ok((
                Tag {
                    class,
                    constructed,
                    number: low_bits as u32,
                },
                1,
            ));
        }

        // Long form tag number: base-128 with continuation bits
        let mut number: u32 = 0;
        let mut i = 1;
        loop {
            let Some(&byte) = input.get(i) else {
                return Err(DerError::Bounds {
                    offset: i,
                    len: input.len(),
                });
            };
            if number > u32::MAX >> 7 {
                return Err(DerError::MalformedLength);
            }
            number = (number << 7) | (byte & 0x7F) as u32;
            i += 1;
            if (byte & 0x80) == 0 {
                break;
            }
        }
        Ok((
            Tag {
                class,
                constructed,
                number,
            },
            i,
        ))
    }
}
