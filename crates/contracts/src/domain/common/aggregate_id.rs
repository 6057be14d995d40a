use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types assigned by the backend
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as it appears in a URL path segment
    fn as_string(&self) -> String;

    /// Parse an id taken from a route parameter
    fn from_string(s: &str) -> Result<Self, String>;
}
