//! CLI configuration: thin wrapper around `shoplist_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--profile, --base-url, --timeout, --ordering).

use shoplist_config::{Profile, load_config_or_default, profile_to_client_config};
use shoplist_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `ClientConfig` from the config file, active profile and flags.
///
/// Flag overrides take priority over profile values, which take priority
/// over `[defaults]`.
pub fn resolve_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = global
        .profile
        .clone()
        .unwrap_or_else(|| cfg.active_profile_name());

    let mut profile: Profile = cfg.profile(&profile_name)?;

    if let Some(ref url) = global.base_url {
        profile.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    if let Some(ordering) = global.ordering {
        profile.ordering = Some(ordering);
    }

    let config = profile_to_client_config(&profile, &cfg.defaults)?;
    tracing::debug!(
        profile = %profile_name,
        base_url = %config.base_url,
        ordering = %config.ordering,
        "resolved client config"
    );
    Ok(config)
}
