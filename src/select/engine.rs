//! Single-pass descent: cluster -> {service | parcel | names} -> {role | rolegroup | names}.
//!
//! Lookups scan in document order and the first match wins. Role and role
//! group filters collect every match. The engine is pure: no logging, no
//! mutation, no allocation beyond the result collections.

use crate::document::{Cluster, Document, Parcel, Role, RoleGroup, Service};
use crate::select::{NamesOnly, Selector};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Level at which a named lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Cluster,
    Service,
    Parcel,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Cluster => "cluster",
            Level::Service => "service",
            Level::Parcel => "parcel",
        })
    }
}

/// A cluster, service or parcel named by the selector does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub level: Level,
    /// `None` when no cluster name was given at all.
    pub name: Option<String>,
}

/// Result of [`select`]: borrowed views into the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    Cluster(&'a Cluster),
    Service(&'a Service),
    Parcel(&'a Parcel),
    Roles(Vec<&'a Role>),
    RoleGroups(Vec<&'a RoleGroup>),
    Names(Vec<&'a str>),
    NotFound(NotFound),
}

impl Selection<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Selection::NotFound(_))
    }
}

/// Serializes as the bare entity, a JSON array, or `null` for `NotFound`.
impl Serialize for Selection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::Cluster(c) => c.serialize(serializer),
            Selection::Service(s) => s.serialize(serializer),
            Selection::Parcel(p) => p.serialize(serializer),
            Selection::Roles(r) => r.serialize(serializer),
            Selection::RoleGroups(g) => g.serialize(serializer),
            Selection::Names(n) => n.serialize(serializer),
            Selection::NotFound(_) => serializer.serialize_unit(),
        }
    }
}

pub fn select<'a>(doc: &'a Document, selector: &Selector) -> Selection<'a> {
    if selector.names == Some(NamesOnly::Clusters) {
        return Selection::Names(doc.clusters.iter().map(|c| c.name.as_str()).collect());
    }

    let wanted = selector.cluster.as_deref();
    match doc.clusters.iter().find(|c| Some(c.name.as_str()) == wanted) {
        Some(cluster) => select_in_cluster(cluster, selector),
        None => not_found(Level::Cluster, wanted),
    }
}

fn select_in_cluster<'a>(cluster: &'a Cluster, selector: &Selector) -> Selection<'a> {
    if let Some(wanted) = selector.service.as_deref() {
        return match cluster.services.iter().find(|s| s.kind == wanted) {
            Some(service) => select_in_service(service, selector),
            None => not_found(Level::Service, Some(wanted)),
        };
    }

    if selector.names == Some(NamesOnly::Services) {
        return Selection::Names(cluster.services.iter().map(|s| s.kind.as_str()).collect());
    }

    if let Some(wanted) = selector.parcel.as_deref() {
        return match cluster.parcels.iter().find(|p| p.product == wanted) {
            Some(parcel) => Selection::Parcel(parcel),
            None => not_found(Level::Parcel, Some(wanted)),
        };
    }

    if selector.names == Some(NamesOnly::Parcels) {
        return Selection::Names(cluster.parcels.iter().map(|p| p.product.as_str()).collect());
    }

    Selection::Cluster(cluster)
}

fn select_in_service<'a>(service: &'a Service, selector: &Selector) -> Selection<'a> {
    if let Some(wanted) = selector.role.as_deref() {
        return Selection::Roles(service.roles.iter().filter(|r| r.kind == wanted).collect());
    }

    if selector.names == Some(NamesOnly::Roles) {
        return Selection::Names(service.roles.iter().map(|r| r.name.as_str()).collect());
    }

    if let Some(wanted) = selector.rolegroup.as_deref() {
        return Selection::RoleGroups(
            service
                .role_config_groups
                .iter()
                .filter(|g| g.name == wanted)
                .collect(),
        );
    }

    if selector.names == Some(NamesOnly::RoleGroups) {
        return Selection::Names(
            service
                .role_config_groups
                .iter()
                .map(|g| g.name.as_str())
                .collect(),
        );
    }

    Selection::Service(service)
}

fn not_found<'a>(level: Level, name: Option<&str>) -> Selection<'a> {
    Selection::NotFound(NotFound {
        level,
        name: name.map(str::to_string),
    })
}
