//! Compact byte snapshots of engine state.
//!
//! Round and game states hold no handles or open resources, so a transport
//! layer can persist them between calls with [`encode`] and restore them with
//! [`decode`]. The encoding is `bincode`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::SnapshotError;

/// Encode any serializable state to bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, SnapshotError> {
    bincode::serialize(value).map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decode a state previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}
