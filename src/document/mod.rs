//! Deployment document: typed model plus file decoding.

pub mod load;
pub mod model;

pub use load::{load_document, load_raw};
pub use model::{Cluster, Document, Parcel, Role, RoleGroup, Service};
