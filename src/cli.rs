use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yamlconv")]
#[command(about = "Convert legacy app.yaml values and handlers to OnePlatform form", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $YAMLCONV_CONFIG, then config/yamlconv.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Restructure the URL handlers of a YAML or JSON document
    Handlers(HandlersArgs),
    /// Apply a single named converter to a scalar
    Value(ValueArgs),
}

#[derive(clap::Args, Debug)]
pub struct HandlersArgs {
    /// Document holding a handler list, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ValueArgs {
    /// Converter name, e.g. `latency_to_duration` or `enum:LOGIN`
    #[arg(long, short)]
    pub converter: String,

    /// Value to convert, parsed as a YAML scalar
    pub value: String,
}
