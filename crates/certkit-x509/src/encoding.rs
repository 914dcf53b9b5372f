//! DER assembly helpers for certificate-request-style structures.

use certkit_asn1::oid::Oid;
use certkit_asn1::Encoder;

use crate::X509Error;

/// Encode an attribute pair: `SEQUENCE { type OID, value UTF8String }`.
pub fn encode_attribute(oid: &Oid, value: &str) -> Result<Vec<u8>, X509Error> {
    let mut body = Encoder::new();
    body.write_raw(&oid.to_der()?);
    body.write_utf8_string(value);
    let mut seq = Encoder::new();
    seq.write_sequence(&body.finish());
    Ok(seq.finish())
}
