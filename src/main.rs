use anyhow::Context;
use boxedit::{Config, replay};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boxedit")]
#[command(version, about = "Interactive box editing for plot data sources")]
struct Cli {
    /// Config file to use instead of ~/.config/boxedit/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON gesture script and print the resulting data sources
    Replay {
        /// Script file (JSON array of events)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print the number of commits to stderr
        #[arg(long, action = ArgAction::SetTrue)]
        commits: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f', action = ArgAction::SetTrue)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script, commits } => {
            let config = load_config(cli.config.as_ref())?;
            let mut tool = config.build_tool().context("Invalid tool configuration")?;
            log::debug!(
                "Tool frame {:?}, dimensions {:?}",
                tool.frame(),
                tool.config().dimensions
            );
            let events = replay::load_script(&script)?;

            let committed = replay::run(&mut tool, &events);
            log::info!("Replayed {} event(s), {} commit(s)", events.len(), committed);
            if commits {
                eprintln!("commits: {committed}");
            }

            let snapshot = replay::snapshot(&tool);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Init { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::get_config_path()?,
            };
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        Command::ShowConfig => {
            let config = load_config(cli.config.as_ref())?;
            let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{rendered}");
        }
    }

    Ok(())
}
