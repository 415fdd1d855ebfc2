//! List filtering from query-string parameters
//!
//! Each list endpoint declares an allow-list mapping public query parameter
//! names to store filter targets. Incoming parameter values are
//! comma-separated; they are split, trimmed, and empties dropped. Non-empty
//! lists become `target IN values` predicates. Parameters outside the
//! declared allow-list are ignored by policy, never an error.

use serde::Serialize;
use std::collections::HashMap;

/// One resolved filter predicate: `target IN values`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Store-side filter target (declared, never client-supplied)
    pub target: &'static str,
    /// Values to match, already trimmed and non-empty
    pub values: Vec<String>,
}

/// The set of predicates extracted from one request
///
/// An empty set means the collection is returned unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    /// The unfiltered set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}

/// Declared allow-list of filterable parameters for one endpoint
///
/// Holds `(public parameter name, store filter target)` pairs. Only declared
/// parameters ever influence the result set.
#[derive(Debug, Clone, Copy)]
pub struct ListFilter {
    fields: &'static [(&'static str, &'static str)],
}

/// Schema description of one filter parameter, for API documentation
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSchema {
    pub name: &'static str,
    pub required: bool,
    #[serde(rename = "in")]
    pub location: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ListFilter {
    /// Declare the filterable parameters for an endpoint
    pub const fn new(fields: &'static [(&'static str, &'static str)]) -> Self {
        Self { fields }
    }

    /// Extract predicates from the request's query parameters
    ///
    /// For each declared parameter: split its raw value on commas, trim,
    /// drop empties. A non-empty value list yields one predicate keyed by
    /// the declared target. Undeclared parameters are ignored.
    pub fn collect(&self, params: &HashMap<String, String>) -> FilterSet {
        let mut predicates = Vec::new();

        for &(param, target) in self.fields {
            let raw = match params.get(param) {
                Some(raw) => raw,
                None => continue,
            };

            let values: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();

            if !values.is_empty() {
                predicates.push(Predicate { target, values });
            }
        }

        FilterSet { predicates }
    }

    /// Enumerate the declared parameter names for documentation generators
    pub fn schema_parameters(&self) -> Vec<ParameterSchema> {
        self.fields
            .iter()
            .map(|&(param, _)| ParameterSchema {
                name: param,
                required: false,
                location: "query",
                kind: "string",
            })
            .collect()
    }
}
