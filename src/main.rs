//! taskq - terminal task manager
//!
//! Interactive to-do list backed by an ordered task queue.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use taskq::shell::Shell;
use taskq::{Locale, ShellConfig, TaskqError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskq")]
#[command(version = "0.1.0")]
#[command(about = "Interactive terminal task manager", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to {config_dir}/taskq/config.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for labels and messages
    #[arg(long, global = true, value_enum, env = "TASKQ_LOCALE")]
    locale: Option<Locale>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Do not clear the screen between actions
    #[arg(long, global = true)]
    no_clear: bool,

    /// Do not wait for ENTER after each action
    #[arg(long, global = true)]
    no_pause: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Run,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the configuration file search path
    Paths,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> taskq::Result<ShellConfig> {
        let mut config = ShellConfig::load(self.config.as_deref())?;

        if let Some(locale) = self.locale {
            config = config.with_locale(locale);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        if self.no_pause {
            config = config.with_pause_after_action(false);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "taskq=debug,info"
    } else {
        "taskq=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
            if let Err(e) = shell.run() {
                exit_with(&e);
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                } else {
                    println!("{}", "Configuration:".cyan().bold());
                    println!("   locale:             {}", config.locale);
                    println!("   color:              {}", config.color);
                    println!("   clear_screen:       {}", config.clear_screen);
                    println!("   pause_after_action: {}", config.pause_after_action);
                }
            }

            ConfigAction::Paths => {
                let explicit = cli.config.as_ref();
                if let Some(path) = explicit {
                    println!("{} {}", "Explicit:".cyan(), path.display());
                }
                match ShellConfig::default_path() {
                    Some(path) => {
                        let marker = if path.exists() {
                            "found".green()
                        } else {
                            "not found".yellow()
                        };
                        println!("{} {} ({})", "User:".cyan(), path.display(), marker);
                    }
                    None => println!("{} unavailable on this platform", "User:".cyan()),
                }
            }
        },
    }

    Ok(())
}

fn exit_with(err: &TaskqError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);
    std::process::exit(err.exit_code());
}
