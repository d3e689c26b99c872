//! Strongly-typed identifiers used across the client.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of a party (organization or person).
///
/// The backend treats this as opaque text, so it is not parsed as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyUuid(String);

impl PartyUuid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PartyUuid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartyUuid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PartyUuid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Uuid> for PartyUuid {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for PartyUuid {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("PartyUuid: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Identifier of an access package.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(Uuid);

/// Identifier of a role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(Uuid);

/// Identifier of an access-package area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(Uuid);

/// Identifier of a group of areas (top level of the package taxonomy).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaGroupId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> DomainResult<Self> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(PackageId, "PackageId");
impl_uuid_newtype!(RoleId, "RoleId");
impl_uuid_newtype!(AreaId, "AreaId");
impl_uuid_newtype!(AreaGroupId, "AreaGroupId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_uuid_accepts_opaque_text() {
        let id: PartyUuid = "abc-123".parse().unwrap();
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn party_uuid_rejects_blank_input() {
        let err = "   ".parse::<PartyUuid>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn party_uuid_serializes_as_plain_string() {
        let id = PartyUuid::new("p-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
    }

    #[test]
    fn package_id_parse_failure_names_the_type() {
        let err = "not-a-uuid".parse::<PackageId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("PackageId")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn role_id_round_trips_through_display() {
        let uuid = Uuid::from_u128(0x0190_6c3e_7a2b_7c4d_9e8f_0a1b_2c3d_4e5f);
        let id = RoleId::from_uuid(uuid);
        assert_eq!(id.to_string().parse::<RoleId>().unwrap(), id);
    }
}
