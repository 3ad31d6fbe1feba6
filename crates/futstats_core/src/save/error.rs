use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted archive")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        // A newer-versioned archive can be retried after migration; damaged
        // bytes cannot.
        matches!(self, SaveError::VersionMismatch { .. })
    }
}
