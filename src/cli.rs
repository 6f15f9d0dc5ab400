use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "profile-prompt",
    version,
    about = "Build a personal-profile prompt from selected disclosure sections"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Built-in section catalog (overrides settings.toml)"
    )]
    pub catalog: Option<CatalogKind>,
    #[arg(
        long,
        global = true,
        help = "Custom catalog file (.json or .toml); takes precedence over --catalog"
    )]
    pub catalog_file: Option<String>,
    #[arg(long, global = true, value_enum, help = "Prompt wording style")]
    pub style: Option<PromptStyle>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the compiled prompt for the current selection.
    Prompt {
        #[arg(long, default_value_t = false, help = "Also copy the prompt to the clipboard")]
        copy: bool,
    },
    /// List sections, optionally filtered.
    Sections {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long, default_value_t = false)]
        selected_only: bool,
    },
    Select {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    Deselect {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Replace the whole selection with a preset.
    Preset {
        #[arg(value_enum)]
        preset: Preset,
    },
    /// Change disclosure policy flags.
    Set {
        #[arg(long)]
        include_inferred: Option<bool>,
        #[arg(long)]
        include_confidence: Option<bool>,
        #[arg(long)]
        exclude_sensitive: Option<bool>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Bullets per section, clamped to 1..=25"
        )]
        max_items: Option<String>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Reset,
    Path,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    List,
    Validate { path: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Classic,
    Extended,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    #[default]
    Concise,
    Comprehensive,
}

impl PromptStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStyle::Concise => "concise",
            PromptStyle::Comprehensive => "comprehensive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Recommended,
    All,
    #[value(name = "none")]
    #[serde(rename = "none")]
    Clear,
}
