//! DynamoDB glue for the attribute codecs.
//!
//! Places codec output into DynamoDB items and rebuilds entities from them.
//! Nothing here talks to DynamoDB; the functions operate on in-memory items.

pub mod attributes;
pub mod codecs;
pub mod conversions;
pub mod entities;
pub mod error;
pub mod keys;

pub use attributes::{get_attribute, get_required_attribute, put_attribute, Item, StoredScalar};
pub use codecs::AttributeCodecs;
pub use entities::{DemographicUser, HealthDataRecord, Study};
pub use error::{RepositoryError, Result};
