/// DER codec errors.
///
/// Every decode step validates its precondition and fails immediately;
/// there is no recovery, and a partially decoded result is never returned.
#[derive(Debug, thiserror::Error)]
pub enum DerError {
    #[error("offset {offset} past end of {len}-byte buffer")]
    Bounds { offset: usize, len: usize },

    #[error("indefinite or oversized length encoding")]
    MalformedLength,

    #[error("unexpected tag {found:#04x}, wanted {expected:#04x}")]
    UnexpectedTag { expected: u8, found: u8 },

    #[error("invalid object identifier: {0}")]
    InvalidOid(String),
}
