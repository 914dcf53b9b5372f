//! Serial number and authority key identifier extraction.
//!
//! Both extractors walk the fixed `Certificate` → `tbsCertificate` shape
//! with a forward-only reader; every structural expectation that fails
//! aborts the whole decode with a specific error.

use certkit_asn1::oid::{known, Oid};
use certkit_asn1::{split_sequence_parts, tags, unwrap_sequence, Reader, TagClass};

use crate::X509Error;

// [3] EXPLICIT Extensions marker inside tbsCertificate
const EXTENSIONS_TAG: u8 = tags::CONTEXT_SPECIFIC | tags::CONSTRUCTED | 3;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Enter `Certificate` → `tbsCertificate` and skip the leading `[0]`
/// version field, leaving the reader at the serial number.
fn tbs_after_version(der: &[u8]) -> Result<Reader<'_>, X509Error> {
    let mut cert = Reader::new(der).read_sequence()?;
    let mut tbs = cert.read_sequence()?;
    tbs.read_context_specific(0)?;
    Ok(tbs)
}

/// Extract the certificate serial number as lower-case hex.
///
/// Returns the INTEGER content bytes verbatim, including a positive-sign
/// leading zero when the certificate carries one.
pub fn serial_number_hex(der: &[u8]) -> Result<String, X509Error> {
    let mut tbs = tbs_after_version(der)?;
    Ok(hex(tbs.read_integer()?))
}

/// Extract the Authority Key Identifier (OID 2.5.29.35) key-identifier
/// bytes as lower-case hex.
pub fn authority_key_identifier_hex(der: &[u8]) -> Result<String, X509Error> {
    let mut tbs = tbs_after_version(der)?;
    tbs.read_integer()?;

    // signature, issuer, validity, subject, subjectPublicKeyInfo and the
    // optional unique identifiers sit between the serial number and the
    // extensions marker; their internal structure is irrelevant here.
    while !tbs.is_empty() && tbs.remaining()[0] != EXTENSIONS_TAG {
        tbs.read_tlv()?;
    }
    let ext_block = tbs.read_context_specific(3)?;

    let ext_list = unwrap_sequence(ext_block.value)?;
    for part in split_sequence_parts(ext_list)? {
        let mut ext = Reader::new(unwrap_sequence(part)?);
        let ext_oid = Oid::from_der_value(ext.read_oid()?)?;
        if ext_oid != known::authority_key_identifier() {
            continue;
        }

        // critical BOOLEAN DEFAULT FALSE
        if !ext.is_empty() && ext.remaining()[0] == tags::BOOLEAN {
            ext.read_boolean()?;
        }
        let extn_value = ext.read_octet_string()?;

        // AKI extnValue ::= SEQUENCE { keyIdentifier [0] IMPLICIT OCTET STRING, ... }
        let mut aki = Reader::new(unwrap_sequence(extn_value)?);
        while !aki.is_empty() {
            let tlv = aki.read_tlv()?;
            if tlv.tag.class == TagClass::ContextSpecific && tlv.tag.number == 0 {
                return Ok(hex(tlv.value));
            }
        }
        return Err(X509Error::MissingAkiExtension);
    }
    Err(X509Error::MissingAkiExtension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use certkit_asn1::{DerError, Encoder};

    /// tbsCertificate prefix: `[0]` version, serial, and two placeholder
    /// fields standing in for signature and issuer.
    fn tbs_prefix(serial: &[u8]) -> Encoder {
        let mut version = Encoder::new();
        version.write_integer(&[0x02]);
        let mut tbs = Encoder::new();
        tbs.write_context_specific(0, &version.finish());
        tbs.write_integer(serial);
        tbs.write_sequence(&[]);
        tbs.write_sequence(&[]);
        tbs
    }

    fn wrap_cert(tbs_content: &[u8]) -> Vec<u8> {
        let mut body = Encoder::new();
        body.write_sequence(tbs_content);
        body.write_sequence(&[]);
        body.write_bit_string(&[0x00]);
        let mut cert = Encoder::new();
        cert.write_sequence(&body.finish());
        cert.finish()
    }

    fn extension(oid: &Oid, critical: bool, extn_value: &[u8]) -> Vec<u8> {
        let mut body = Encoder::new();
        body.write_raw(&oid.to_der().unwrap());
        if critical {
            body.write_boolean(true);
        }
        body.write_octet_string(extn_value);
        let mut seq = Encoder::new();
        seq.write_sequence(&body.finish());
        seq.finish()
    }

    fn aki_extn_value(key_id: &[u8]) -> Vec<u8> {
        let mut inner = Encoder::new();
        inner.write_tlv(0x80, key_id);
        let mut seq = Encoder::new();
        seq.write_sequence(&inner.finish());
        seq.finish()
    }

    fn cert_with_extensions(serial: &[u8], extensions: &[Vec<u8>]) -> Vec<u8> {
        let mut list = Encoder::new();
        for ext in extensions {
            list.write_raw(ext);
        }
        let mut ext_seq = Encoder::new();
        ext_seq.write_sequence(&list.finish());
        let mut tbs = tbs_prefix(serial);
        tbs.write_context_specific(3, &ext_seq.finish());
        wrap_cert(&tbs.finish())
    }

    #[test]
    fn serial_number_from_synthetic_cert() {
        let cert = wrap_cert(&tbs_prefix(&[0x1A, 0x2B, 0x3C]).finish());
        assert_eq!(serial_number_hex(&cert).unwrap(), "1a2b3c");
    }

    #[test]
    fn aki_found_behind_critical_flag() {
        let key_id = [0x11, 0x22, 0x33, 0x44];
        let aki = extension(
            &known::authority_key_identifier(),
            true,
            &aki_extn_value(&key_id),
        );
        // A decoy extension before the match
        let decoy = extension(&Oid::parse("2.5.29.19").unwrap(), false, &[0x30, 0x00]);
        let cert = cert_with_extensions(&[0x01], &[decoy, aki]);
        assert_eq!(authority_key_identifier_hex(&cert).unwrap(), "11223344");
    }

    #[test]
    fn aki_oid_absent_is_missing_extension() {
        let decoy = extension(&Oid::parse("2.5.29.14").unwrap(), false, &[0x04, 0x00]);
        let cert = cert_with_extensions(&[0x01], &[decoy]);
        let err = authority_key_identifier_hex(&cert).unwrap_err();
        assert!(matches!(err, X509Error::MissingAkiExtension));
    }

    #[test]
    fn aki_without_key_identifier_is_missing_extension() {
        // AKI extnValue whose SEQUENCE has no [0] field
        let mut empty_seq = Encoder::new();
        empty_seq.write_sequence(&[]);
        let aki = extension(
            &known::authority_key_identifier(),
            false,
            &empty_seq.finish(),
        );
        let cert = cert_with_extensions(&[0x01], &[aki]);
        let err = authority_key_identifier_hex(&cert).unwrap_err();
        assert!(matches!(err, X509Error::MissingAkiExtension));
    }

    #[test]
    fn no_extensions_block_fails_with_bounds() {
        // The sibling scan runs off the end of tbsCertificate
        let cert = wrap_cert(&tbs_prefix(&[0x01]).finish());
        let err = authority_key_identifier_hex(&cert).unwrap_err();
        assert!(matches!(err, X509Error::Der(DerError::Bounds { .. })));
    }

    #[test]
    fn missing_version_marker_rejected() {
        // v1-style tbsCertificate starting directly with the serial
        let mut tbs = Encoder::new();
        tbs.write_integer(&[0x01]);
        let cert = wrap_cert(&tbs.finish());
        let err = serial_number_hex(&cert).unwrap_err();
        assert!(matches!(
            err,
            X509Error::Der(DerError::UnexpectedTag {
                expected: 0xA0,
                ..
            })
        ));
    }

    #[test]
    fn non_sequence_buffer_rejected() {
        let err = serial_number_hex(&[0x04, 0x02, 0xAA, 0xBB]).unwrap_err();
        assert!(matches!(
            err,
            X509Error::Der(DerError::UnexpectedTag {
                expected: 0x30,
                ..
            })
        ));
    }

    #[test]
    fn key_identifier_length_is_not_assumed() {
        // 8-byte key id comes back whole, not truncated or padded to 20
        let key_id = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03];
        let aki = extension(
            &known::authority_key_identifier(),
            false,
            &aki_extn_value(&key_id),
        );
        let cert = cert_with_extensions(&[0x7F], &[aki]);
        assert_eq!(
            authority_key_identifier_hex(&cert).unwrap(),
            "deadbeef00010203"
        );
    }
}
