// ── Runtime client configuration ──
//
// Describes *where* and *how* to reach the service. Never touches disk;
// the CLI (via shoplist-config) builds a `ClientConfig` and hands it in.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

/// How overlapping reads against the same store are reconciled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Whichever response resolves last overwrites the collection.
    #[default]
    LastResolved,
    /// Responses older than the most recently issued read are discarded.
    LatestIssued,
}

/// Configuration for a single `ShopClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, e.g. the public mock server or `http://localhost:3000`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Stale-response policy for reads.
    pub ordering: ResponseOrdering,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: shoplist_api::DEFAULT_BASE_URL
                .parse()
                .expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
            ordering: ResponseOrdering::default(),
        }
    }
}
