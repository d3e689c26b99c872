//! Query-string construction.
//!
//! Absent options are omitted, sequences become repeated same-named entries,
//! and every value is rendered through `Display`.

use accessadmin_core::PartyUuid;

/// Ordered list of query pairs handed to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

/// Named request options that contribute query pairs.
pub trait ToQuery {
    fn append_to(&self, params: &mut QueryParams);
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params starting with the acting `party`.
    pub fn party(party: &PartyUuid) -> Self {
        let mut params = Self::new();
        params.push("party", party);
        params
    }

    /// Params for a `from` -> `to` relationship seen by `party`.
    pub fn direction(party: &PartyUuid, from: &PartyUuid, to: &PartyUuid) -> Self {
        let mut params = Self::party(party);
        params.push("from", from).push("to", to);
        params
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_all<I>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    pub fn extend_from(&mut self, options: &impl ToQuery) -> &mut Self {
        options.append_to(self);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Percent-encoded `a=1&b=2` form.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
