//! Clap derive structures for the `shoplist` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use shoplist_core::{EntityId, ResponseOrdering};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shoplist -- browse shopping lists and add items
#[derive(Debug, Parser)]
#[command(
    name = "shoplist",
    version,
    about = "Browse shopping lists and add items from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service profile to use
    #[arg(long, short = 'p', env = "SHOPLIST_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service base URL (overrides profile)
    #[arg(long, short = 'u', env = "SHOPLIST_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHOPLIST_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SHOPLIST_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// How overlapping reads are reconciled: last-resolved or latest-issued
    #[arg(long, global = true)]
    pub ordering: Option<ResponseOrdering>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all shopping lists
    #[command(alias = "ls")]
    Lists,

    /// Show one list with its items
    Show(ListRef),

    /// Show the items of a list
    Items(ListRef),

    /// Add an item to a list
    Add(AddArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ListRef {
    /// List identifier
    pub list_id: EntityId,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// List identifier
    pub list_id: EntityId,

    /// Item title
    #[arg(long, short = 't')]
    pub title: String,

    /// Quantity to buy
    #[arg(long, short = 'n', default_value_t = 1.0)]
    pub quantity: f64,

    /// Unit price
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file with one profile
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Profile name to create
    #[arg(long, default_value = "default")]
    pub name: String,

    /// Base URL for the profile (defaults to the public mock server)
    #[arg(long)]
    pub url: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
