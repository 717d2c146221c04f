//! HTTP contract with the query backend: wire types and bearer-token client.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{Motif, Properties, RawData, RawNode, RawRelationship};
