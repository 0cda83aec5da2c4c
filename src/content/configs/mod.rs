/*!
 * Domain page configs.
 *
 * Each config is a root object with optional `meta` and an ordered,
 * activity-filterable list of items. Each one also ships a hardcoded
 * `Default` so its page renders something when the API has nothing.
 */

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod contact;
pub mod contact_map;
pub mod treatments;
pub mod ivf_icsi;

pub use contact::{ContactChannel, ContactConfig, WorkingHours};
pub use contact_map::{ContactMapConfig, Direction};
pub use treatments::{Treatment, TreatmentsConfig};
pub use ivf_icsi::IvfIcsiConfig;

/// Version information attached to a config document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Response metadata carried next to `data` by enveloped endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// `{ data, meta? }` wrapper used by some config endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<EnvelopeMeta>,
}

/// Interpret a config response body.
///
/// An object carrying a `data` key is always treated as an envelope, so a
/// malformed `data` payload is an error rather than a bare config. Anything
/// else is parsed as the bare config.
pub fn parse_config<C: DeserializeOwned>(value: Value) -> Result<C, serde_json::Error> {
    let enveloped = value.as_object().is_some_and(|object| object.contains_key("data"));
    if enveloped {
        serde_json::from_value::<ApiEnvelope<C>>(value).map(|envelope| envelope.data)
    } else {
        serde_json::from_value::<C>(value)
    }
}

/// A config document served from its own API endpoint
pub trait PageConfig: DeserializeOwned + Default + Send + 'static {
    /// Endpoint path below the API base URL
    const ENDPOINT: &'static str;

    /// Short name used in logs
    const NAME: &'static str;
}
