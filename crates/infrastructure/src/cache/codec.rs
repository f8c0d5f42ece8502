//! Binary payload codec for cached entity values.
//!
//! Postcard keeps payloads compact and `decode(encode(v)) == v` holds for
//! every entity type in the plane. Failures are always surfaced as
//! `DomainError::Serialization`; a value that fails to encode is never
//! partially written to the store.

use gateplane_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, DomainError> {
    postcard::to_stdvec(value).map_err(|e| DomainError::Serialization(e.to_string()))
}

pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, DomainError> {
    postcard::from_bytes(payload).map_err(|e| DomainError::Serialization(e.to_string()))
}
