// Persisted match record and its byte format.
// MessagePack + LZ4 compression with versioning and integrity checks; where
// the bytes land (files, slots, cloud) is the storage collaborator's concern.

pub mod error;
pub mod format;

pub use error::SaveError;
pub use format::{decompress_and_deserialize, serialize_and_compress, MatchArchive};

pub const ARCHIVE_VERSION: u32 = 1;
