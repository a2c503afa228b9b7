//! Config subcommand handlers.

use shoplist_config::{
    Config, Profile, config_path, load_config, profile_to_client_config, save_config,
};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, InitArgs};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }
        ConfigCommand::Show => {
            let cfg = load_config()?;
            let rendered = toml::to_string_pretty(&cfg)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }
        ConfigCommand::Init(init) => handle_init(init, global),
    }
}

fn handle_init(args: InitArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config_path();
    if path.exists() && !args.force {
        return Err(CliError::ConfigExists {
            path: path.display().to_string(),
        });
    }

    let mut profile = Profile::default();
    if let Some(url) = args.url {
        profile.base_url = url;
    }

    let mut cfg = Config {
        default_profile: Some(args.name.clone()),
        ..Config::default()
    };
    // Reject a bad URL before anything is written.
    profile_to_client_config(&profile, &cfg.defaults)?;
    cfg.profiles.insert(args.name.clone(), profile);

    let written = save_config(&cfg)?;
    tracing::info!(path = %written.display(), profile = %args.name, "wrote config");
    output::print_output(
        &format!("Wrote profile '{}' to {}", args.name, written.display()),
        global.quiet,
    );
    Ok(())
}
