//! Selector specification: which cluster/service/role/parcel to drill into,
//! or which level to list by name.

use crate::error::Error;

/// Level whose names are listed instead of returning entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamesOnly {
    Clusters,
    Services,
    Roles,
    RoleGroups,
    Parcels,
}

/// Immutable query passed to [`crate::select::select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub cluster: Option<String>,
    pub service: Option<String>,
    pub role: Option<String>,
    pub rolegroup: Option<String>,
    pub parcel: Option<String>,
    pub names: Option<NamesOnly>,
}

impl Selector {
    pub fn cluster(name: impl Into<String>) -> Self {
        Self {
            cluster: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn names_only(level: NamesOnly) -> Self {
        Self {
            names: Some(level),
            ..Self::default()
        }
    }

    pub fn with_service(mut self, name: impl Into<String>) -> Self {
        self.service = Some(name.into());
        self
    }

    pub fn with_role(mut self, kind: impl Into<String>) -> Self {
        self.role = Some(kind.into());
        self
    }

    pub fn with_rolegroup(mut self, name: impl Into<String>) -> Self {
        self.rolegroup = Some(name.into());
        self
    }

    pub fn with_parcel(mut self, product: impl Into<String>) -> Self {
        self.parcel = Some(product.into());
        self
    }

    pub fn with_names(mut self, level: NamesOnly) -> Self {
        self.names = Some(level);
        self
    }

    /// Reject combinations that the selection order cannot honor together.
    ///
    /// The engine assumes a validated selector; this belongs to whoever
    /// builds one from user input.
    pub fn validate(&self) -> Result<(), Error> {
        let conflicts = [
            (
                self.cluster.is_some() && self.names == Some(NamesOnly::Clusters),
                "a cluster name and --clusters",
            ),
            (
                self.service.is_some() && self.parcel.is_some(),
                "a service and a parcel",
            ),
            (
                self.role.is_some() && self.rolegroup.is_some(),
                "a role and a role group",
            ),
            (
                self.service.is_some() && self.names == Some(NamesOnly::Services),
                "a service name and --services",
            ),
            (
                self.role.is_some() && self.names == Some(NamesOnly::Roles),
                "a role and --roles",
            ),
            (
                self.rolegroup.is_some() && self.names == Some(NamesOnly::RoleGroups),
                "a role group and --rolegroups",
            ),
            (
                self.parcel.is_some() && self.names == Some(NamesOnly::Parcels),
                "a parcel and --parcels",
            ),
        ];

        match conflicts.iter().find(|(hit, _)| *hit) {
            Some((_, what)) => Err(Error::InvalidSelector(format!(
                "cannot set both {}",
                what
            ))),
            None => Ok(()),
        }
    }
}
