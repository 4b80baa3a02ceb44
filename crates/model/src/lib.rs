use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;

pub mod filter;
pub mod hours;
pub mod shop;

/// Canonical fixture data for tests and examples.
pub trait ExampleData {
    fn example_data() -> Self;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_miles: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_miles: f64, content: T) -> Self {
        Self {
            distance_miles,
            content,
        }
    }
}
