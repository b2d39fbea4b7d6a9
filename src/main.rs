use clap::{Args, Parser, Subcommand, ValueEnum};
use revstamp::config::{self, Config, ConfigError};
use revstamp::{output, pipeline};
use std::path::PathBuf;

/// Config-file and override flags shared by `build` and `check`.
#[derive(Args, Clone)]
struct ConfigArgs {
    /// Path to the pipeline config file
    #[arg(long, default_value = "revstamp.toml")]
    config: PathBuf,

    /// Override: root of all source paths
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Override: destination root
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Override: source subdirectory to process (repeatable)
    #[arg(long = "path")]
    paths: Vec<String>,

    /// Override: fingerprint extension, leading dot included (repeatable)
    #[arg(long = "ext")]
    exts: Vec<String>,

    /// Override: public-path domain prefix
    #[arg(long)]
    domain: Option<String>,
}

impl ConfigArgs {
    /// Load the config file when present, apply flag overrides, validate.
    ///
    /// The library treats an incomplete config as a silent no-op; at the CLI
    /// that silence would read as a successful build that did nothing, so an
    /// incomplete resolved config is rejected here instead.
    fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = if self.config.exists() {
            Config::load(&self.config)?
        } else {
            Config::default()
        };

        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if !self.paths.is_empty() {
            config.paths = self.paths.clone();
        }
        if !self.exts.is_empty() {
            config.exts = self.exts.clone();
        }
        if let Some(domain) = &self.domain {
            config.domain = domain.clone();
        }

        config.validate()?;
        if !config.is_complete() {
            return Err(ConfigError::Validation(format!(
                "base_dir and paths must be set (via {} or flags)",
                self.config.display()
            )));
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MapFormat {
    Text,
    Json,
}

#[derive(Args)]
struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// How to print the rename map after the build
    #[arg(long, value_enum, default_value = "text")]
    map_format: MapFormat,
}

#[derive(Parser)]
#[command(name = "revstamp")]
#[command(about = "Fingerprint static assets and rewrite references to them")]
#[command(long_about = "\
Fingerprint static assets and rewrite references to them

revstamp copies a source tree into an output directory, renaming files
whose extension is configured for fingerprinting to embed a short content
hash (app.js → app_3f2a1bc.js), then rewrites url(...) references in
CSS/LESS/SASS files and src=... references in HTML/Mustache files so they
point at the fingerprinted names.

Configuration comes from revstamp.toml:

  base_dir = \"site\"            # root of all source paths
  paths = [\"assets\", \"pages\"]  # subdirectories of base_dir to process
  output_dir = \"dist\"          # destination root
  exts = [\".js\", \".png\"]       # fingerprinted extensions
  domain = \"\"                  # optional public-path prefix

Any field can be overridden per invocation with flags. Run
'revstamp gen-config' for a documented starting point.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: fingerprint and copy, then rewrite references
    Build(BuildArgs),
    /// Walk the configured paths and report what a build would do
    Check(ConfigArgs),
    /// Print a stock revstamp.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let config = args.config.resolve()?;
            let summary = pipeline::run(&config)?;
            output::print_build_output(&summary);
            match args.map_format {
                MapFormat::Text => output::print_map_text(&summary.map),
                MapFormat::Json => println!("{}", output::format_map_json(&summary.map)?),
            }
        }
        Command::Check(args) => {
            let config = args.resolve()?;
            let plan = pipeline::plan(&config)?;
            output::print_check_output(&plan);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
