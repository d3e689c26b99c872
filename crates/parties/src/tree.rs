//! Operations over a forest of authorized parties.
//!
//! Traversal is pre-order, depth-first, left-to-right: a party comes
//! immediately before the subtree of its first subunit and after every
//! earlier sibling's subtree. Occurrences are never deduplicated by
//! `partyUuid`.

use crate::party::AuthorizedParty;

/// Every party in the forest, in pre-order.
///
/// `flatten(&[])` is empty; a forest without subunits comes back in its
/// original order.
pub fn flatten(roots: &[AuthorizedParty]) -> Vec<&AuthorizedParty> {
    flatten_with_depth(roots)
        .into_iter()
        .map(|(_, party)| party)
        .collect()
}

/// Like [`flatten`], paired with each party's depth (roots are depth 0).
pub fn flatten_with_depth(roots: &[AuthorizedParty]) -> Vec<(usize, &AuthorizedParty)> {
    let mut out = Vec::new();
    // Children are pushed in reverse so the leftmost pops first.
    let mut stack: Vec<(usize, &AuthorizedParty)> =
        roots.iter().rev().map(|party| (0, party)).collect();

    while let Some((depth, party)) = stack.pop() {
        out.push((depth, party));
        stack.extend(party.subunits().iter().rev().map(|child| (depth + 1, child)));
    }

    out
}

/// Total number of party occurrences in the forest.
pub fn count(roots: &[AuthorizedParty]) -> usize {
    let mut total = 0;
    let mut stack: Vec<&AuthorizedParty> = roots.iter().collect();

    while let Some(party) = stack.pop() {
        total += 1;
        stack.extend(party.subunits());
    }

    total
}

/// First occurrence of `party_uuid` in pre-order.
pub fn find<'a>(roots: &'a [AuthorizedParty], party_uuid: &str) -> Option<&'a AuthorizedParty> {
    flatten(roots)
        .into_iter()
        .find(|party| party.party_uuid.as_str() == party_uuid)
}

/// Parties whose display name (case-insensitive) or organization number
/// contains `term`, in pre-order. A blank term matches everything.
pub fn search<'a>(roots: &'a [AuthorizedParty], term: &str) -> Vec<&'a AuthorizedParty> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return flatten(roots);
    }

    flatten(roots)
        .into_iter()
        .filter(|party| {
            party.display_name().to_lowercase().contains(&needle)
                || party
                    .organization_number
                    .as_deref()
                    .is_some_and(|org| org.contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn party(id: &str) -> AuthorizedParty {
        AuthorizedParty::new(id)
    }

    fn ids<'a>(parties: impl IntoIterator<Item = &'a AuthorizedParty>) -> Vec<&'a str> {
        parties.into_iter().map(|p| p.party_uuid.as_str()).collect()
    }

    fn sample_forest() -> Vec<AuthorizedParty> {
        vec![
            party("a").with_name("Acme Corp").with_organization_number("987654321").with_subunits(vec![
                party("a1").with_name("Acme Oslo").with_subunits(vec![party("a1x")]),
                party("a2").with_name("Acme Bergen"),
            ]),
            party("b").with_name("Bright Ideas"),
            party("c").with_subunits(Vec::new()),
        ]
    }

    #[test]
    fn flatten_empty_forest_is_empty() {
        assert!(flatten(&[]).is_empty());
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn flatten_without_subunits_keeps_root_order() {
        let roots = vec![party("x"), party("y"), party("z")];
        assert_eq!(ids(flatten(&roots)), vec!["x", "y", "z"]);
    }

    #[test]
    fn flatten_is_pre_order_left_to_right() {
        let forest = sample_forest();
        assert_eq!(ids(flatten(&forest)), vec!["a", "a1", "a1x", "a2", "b", "c"]);
    }

    #[test]
    fn flatten_with_depth_reports_nesting() {
        let forest = sample_forest();
        let depths: Vec<(usize, &str)> = flatten_with_depth(&forest)
            .into_iter()
            .map(|(d, p)| (d, p.party_uuid.as_str()))
            .collect();
        assert_eq!(
            depths,
            vec![(0, "a"), (1, "a1"), (2, "a1x"), (1, "a2"), (0, "b"), (0, "c")]
        );
    }

    #[test]
    fn duplicate_uuids_are_kept() {
        let roots = vec![
            party("org").with_subunits(vec![party("shared")]),
            party("other").with_subunits(vec![party("shared")]),
        ];
        assert_eq!(ids(flatten(&roots)), vec!["org", "shared", "other", "shared"]);
    }

    #[test]
    fn find_returns_first_occurrence() {
        let forest = sample_forest();
        let found = find(&forest, "a1x").unwrap();
        assert_eq!(found.party_uuid.as_str(), "a1x");
        assert!(find(&forest, "missing").is_none());
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let forest = sample_forest();
        assert_eq!(ids(search(&forest, "acme")), vec!["a", "a1", "a2"]);
        assert_eq!(ids(search(&forest, "BERGEN")), vec!["a2"]);
    }

    #[test]
    fn search_matches_organization_number() {
        let forest = sample_forest();
        assert_eq!(ids(search(&forest, "98765")), vec!["a"]);
    }

    #[test]
    fn blank_search_returns_everything() {
        let forest = sample_forest();
        assert_eq!(ids(search(&forest, "  ")), ids(flatten(&forest)));
    }

    fn flatten_recursive<'a>(roots: &'a [AuthorizedParty], out: &mut Vec<&'a AuthorizedParty>) {
        for root in roots {
            out.push(root);
            flatten_recursive(root.subunits(), out);
        }
    }

    fn arb_party() -> impl Strategy<Value = AuthorizedParty> {
        let leaf = "[a-z0-9]{1,6}".prop_map(AuthorizedParty::new);
        leaf.prop_recursive(5, 96, 4, |inner| {
            ("[a-z0-9]{1,6}", prop::collection::vec(inner, 0..4))
                .prop_map(|(id, subunits)| AuthorizedParty::new(id).with_subunits(subunits))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: output length equals the node count.
        #[test]
        fn flatten_length_matches_node_count(
            forest in prop::collection::vec(arb_party(), 0..5)
        ) {
            let mut expected = Vec::new();
            flatten_recursive(&forest, &mut expected);
            prop_assert_eq!(flatten(&forest).len(), expected.len());
            prop_assert_eq!(count(&forest), expected.len());
        }

        /// Property: every node precedes all of its descendants, matching
        /// a reference pre-order walk node for node.
        #[test]
        fn flatten_is_pre_order(
            forest in prop::collection::vec(arb_party(), 0..5)
        ) {
            let mut expected = Vec::new();
            flatten_recursive(&forest, &mut expected);
            let actual = flatten(&forest);
            prop_assert_eq!(actual.len(), expected.len());
            for (a, e) in actual.iter().zip(expected.iter()) {
                prop_assert!(std::ptr::eq(*a, *e));
            }
        }
    }
}
