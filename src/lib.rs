//! Query a Cloudera Manager deployment export: pick out a cluster, service,
//! role, role group or parcel, or list the names at one level.

pub mod document;
pub mod error;
pub mod render;
pub mod select;

pub use error::Error;
