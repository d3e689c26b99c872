//! Request options for the authorized-party forest.

use accessadmin_core::PartyUuid;

use crate::query::{QueryParams, ToQuery};

/// Filters for the authorized-party forest. Every toggle is optional and
/// left to the backend default when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizedPartiesQuery {
    pub include_altinn2: Option<bool>,
    pub include_altinn3: Option<bool>,
    pub include_roles: Option<bool>,
    pub include_access_packages: Option<bool>,
    pub include_resources: Option<bool>,
    pub include_instances: Option<bool>,
    pub include_parties_via_key_roles: Option<bool>,
    pub include_sub_parties: Option<bool>,
    pub include_inactive_parties: Option<bool>,
    pub party_filter: Vec<PartyUuid>,
}

impl ToQuery for AuthorizedPartiesQuery {
    fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("includeAltinn2", self.include_altinn2)
            .push_opt("includeAltinn3", self.include_altinn3)
            .push_opt("includeRoles", self.include_roles)
            .push_opt("includeAccessPackages", self.include_access_packages)
            .push_opt("includeResources", self.include_resources)
            .push_opt("includeInstances", self.include_instances)
            .push_opt("includePartiesViaKeyRoles", self.include_parties_via_key_roles)
            .push_opt("includeSubParties", self.include_sub_parties)
            .push_opt("includeInactiveParties", self.include_inactive_parties)
            .push_all("partyFilter", &self.party_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_empty() {
        let mut params = QueryParams::new();
        params.extend_from(&AuthorizedPartiesQuery::default());
        assert!(params.is_empty());
    }

    #[test]
    fn toggles_and_filters() {
        let query = AuthorizedPartiesQuery {
            include_altinn3: Some(true),
            include_roles: Some(false),
            party_filter: vec![PartyUuid::new("a"), PartyUuid::new("b")],
            ..Default::default()
        };
        let mut params = QueryParams::new();
        params.extend_from(&query);
        assert_eq!(
            params.to_query_string(),
            "includeAltinn3=true&includeRoles=false&partyFilter=a&partyFilter=b"
        );
    }
}
