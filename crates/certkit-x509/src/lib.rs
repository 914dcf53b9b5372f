#![forbid(unsafe_code)]
#![doc = "X.509 certificate field extraction and attribute assembly over the certkit DER codec."]

mod encoding;
mod extract;

pub mod pem;

pub use encoding::encode_attribute;
pub use extract::{authority_key_identifier_hex, serial_number_hex};

use certkit_asn1::DerError;

/// Certificate processing errors.
#[derive(Debug, thiserror::Error)]
pub enum X509Error {
    #[error("asn1: {0}")]
    Der(#[from] DerError),

    #[error("authority key identifier (2.5.29.35) not present")]
    MissingAkiExtension,

    #[error("invalid pem: {0}")]
    Pem(String),
}
