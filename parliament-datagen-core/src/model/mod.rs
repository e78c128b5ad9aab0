//! Typed model of the scraped IAM permission metadata.
//!
//! The scraper hands this tool a JSON document: an ordered array of service
//! records, each a nested structure of primitives, sequences, and sub-records.
//! Deserialization is the structural validation layer: a required field that
//! is absent fails the whole run with a diagnostic naming the field, while
//! sequence fields default to empty. Field *values* (ARN syntax and the like)
//! are passed through untouched.

use serde::Deserialize;

use crate::error::DatagenResult;

/// One cloud service's full permission surface.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    /// Human-readable service name, e.g. "Amazon S3".
    pub service_name: String,
    /// The action-namespace prefix, e.g. "s3".
    pub prefix: String,
    /// Global condition keys usable across the service's actions.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Grantable actions.
    #[serde(default)]
    pub privileges: Vec<Privilege>,
    /// Resource-type definitions with their ARN patterns.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A global condition key usable across a service's actions.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub condition: String,
    pub description: String,
    #[serde(rename = "type")]
    pub condition_type: String,
}

/// One grantable action.
#[derive(Debug, Clone, Deserialize)]
pub struct Privilege {
    pub privilege: String,
    pub access_level: String,
    pub description: String,
    #[serde(default)]
    pub resource_types: Vec<ResourceTypeRef>,
}

/// Associates a privilege with a resource type and the condition keys and
/// co-required actions applicable when acting on it.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceTypeRef {
    pub resource_type: String,
    #[serde(default)]
    pub condition_keys: Vec<String>,
    #[serde(default)]
    pub dependent_actions: Vec<String>,
}

/// A resource-type definition with its ARN pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub resource: String,
    pub arn: String,
    #[serde(default)]
    pub condition_keys: Vec<String>,
}

/// Deserialize a scraped permission document into the service model.
///
/// Insertion order of every array in the document is preserved verbatim,
/// which keeps the generated file byte-stable across runs on the same input.
pub fn load_services(json: &str) -> DatagenResult<Vec<Service>> {
    let services: Vec<Service> = serde_json::from_str(json)?;
    log::debug!("Loaded {} services from permission document", services.len());
    Ok(services)
}
