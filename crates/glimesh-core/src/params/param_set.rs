//! Parameter bag and presence checks

use std::collections::BTreeMap;

use super::{ParamName, ParamValue};
use crate::error::ParamError;

/// Named parameters for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<ParamName, ParamValue>,
}

impl Params {
    /// Create an empty param set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a param
    #[must_use]
    pub fn with(mut self, name: ParamName, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Set a param in place
    pub fn set(&mut self, name: ParamName, value: impl Into<ParamValue>) {
        self.values.insert(name, value.into());
    }

    /// Get a param value
    #[must_use]
    pub fn get(&self, name: ParamName) -> Option<&ParamValue> {
        self.values.get(&name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that a param is present
    ///
    /// Logs an error naming the param when it is missing.
    pub fn has_valid_param(&self, name: ParamName) -> bool {
        if self.values.contains_key(&name) {
            return true;
        }
        tracing::error!(param = %name, "Param {name} is required and was not valid");
        false
    }

    /// Check that every listed param is present
    pub fn has_valid_params(&self, names: &[ParamName]) -> bool {
        names.iter().all(|name| self.has_valid_param(*name))
    }

    /// Require every listed param, returning the first missing one as an error
    pub fn require(&self, names: &[ParamName]) -> Result<(), ParamError> {
        match names.iter().find(|name| !self.has_valid_param(**name)) {
            Some(missing) => Err(ParamError::Missing(*missing)),
            None => Ok(()),
        }
    }

    /// Get a required param value
    pub fn required(&self, name: ParamName) -> Result<&ParamValue, ParamError> {
        self.require(&[name])?;
        self.values.get(&name).ok_or(ParamError::Missing(name))
    }

    /// Pick the first present param, in the order given
    #[must_use]
    pub fn pick_param(&self, names: &[ParamName]) -> Option<(ParamName, &ParamValue)> {
        names
            .iter()
            .find_map(|name| self.values.get(name).map(|value| (*name, value)))
    }

    /// Pick the first present param or fail naming the choices
    pub fn pick_required(&self, names: &[ParamName]) -> Result<(ParamName, &ParamValue), ParamError> {
        self.pick_param(names)
            .ok_or_else(|| ParamError::NoneOf(names.to_vec()))
    }

    /// Combine every present param into a GraphQL argument list
    ///
    /// Produces `name: literal` pairs joined by `", "`, or an empty string when
    /// none of the params are present.
    #[must_use]
    pub fn combine_params(&self, names: &[ParamName]) -> String {
        names
            .iter()
            .filter_map(|name| {
                self.values
                    .get(name)
                    .map(|value| format!("{}: {}", name, value.to_graphql()))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<V: Into<ParamValue>> FromIterator<(ParamName, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (ParamName, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
