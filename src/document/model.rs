//! Typed view of a Cloudera Manager deployment export.
//!
//! JSON shape (trimmed to the keys we navigate):
//! {
//!   "clusters": [
//!     {
//!       "name": "Cluster 1",
//!       "services": [
//!         {
//!           "type": "HDFS",
//!           "roles": [{ "type": "NAMENODE", "name": "hdfs-NAMENODE-1", ... }],
//!           "roleConfigGroups": [{ "name": "hdfs-NAMENODE-BASE", ... }],
//!           ...
//!         }
//!       ],
//!       "parcels": [{ "product": "CDH", "version": "...", ... }],
//!       ...
//!     }
//!   ],
//!   ...
//! }
//!
//! Navigation keys are required. Everything else is carried through untouched
//! in `rest` so a selected entity serializes with its full configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque configuration fields kept verbatim.
pub type Opaque = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub clusters: Vec<Cluster>,

    #[serde(flatten)]
    pub rest: Opaque,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    pub name: String,
    pub services: Vec<Service>,
    pub parcels: Vec<Parcel>,

    #[serde(flatten)]
    pub rest: Opaque,
}

/// A deployed service. Its `type` is also its name within the cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Service {
    #[serde(rename = "type")]
    pub kind: String,
    pub roles: Vec<Role>,
    #[serde(rename = "roleConfigGroups")]
    pub role_config_groups: Vec<RoleGroup>,

    #[serde(flatten)]
    pub rest: Opaque,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Role {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,

    #[serde(flatten)]
    pub rest: Opaque,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoleGroup {
    pub name: String,

    #[serde(flatten)]
    pub rest: Opaque,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Parcel {
    pub product: String,

    #[serde(flatten)]
    pub rest: Opaque,
}
