use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use theme_builder::catalogue::{self, Category};
use theme_builder::settings::{self, Settings};
use theme_builder::{
    config, package, validator, ThemeEngine, ThemeError, ThemeFiles, ThemeSession,
};

#[derive(Parser)]
#[command(author, version, about = "Build and validate Obsidian themes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate manifest.json and theme.css from a configuration
    Export {
        /// Theme configuration (TOML); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory (defaults to the configured one, then the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Write into a `<name>-theme` directory under the output directory
        #[arg(long)]
        bundle: bool,
    },
    /// Check a configuration for structural errors
    Validate {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate one value for one CSS variable
    Check { name: String, value: String },
    /// List the known CSS variables
    Variables {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Write the default configuration to a file
    Init { path: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, ThemeError> {
    match command {
        Command::Export {
            config,
            out,
            bundle,
        } => export(config.as_deref(), out, bundle),
        Command::Validate { config } => {
            let session = open_session(config.as_deref(), &Settings::default())?;
            let validation = session.validation();
            if validation.is_valid {
                println!("configuration is valid");
                return Ok(ExitCode::SUCCESS);
            }
            for error in &validation.errors {
                println!("{error}");
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Check { name, value } => {
            let result = validator::validate(&name, &value);
            for error in &result.errors {
                println!("error: {error}");
            }
            for warning in &result.warnings {
                println!("warning: {warning}");
            }
            for suggestion in &result.suggestions {
                println!("suggestion: {suggestion}");
            }
            if result.is_valid {
                println!("{name}: {value} is valid");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Variables { category } => {
            let categories = match category {
                Some(name) => {
                    let Some(category) = Category::from_name(&name) else {
                        eprintln!("error: unknown category {name}");
                        return Ok(ExitCode::FAILURE);
                    };
                    vec![category]
                }
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                println!("/* {} */", category.label());
                for definition in catalogue::by_category(category) {
                    println!(
                        "  {}: {}  ({:?}) {}",
                        definition.name,
                        definition.default_value,
                        definition.kind,
                        definition.description
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { path } => {
            config::save(&path, &Default::default())?;
            println!("wrote default configuration to {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn export(
    config_path: Option<&Path>,
    out: Option<PathBuf>,
    bundle: bool,
) -> Result<ExitCode, ThemeError> {
    let user_settings = settings::load_settings().unwrap_or_else(|error| {
        log::warn!("ignoring unreadable settings: {error}");
        Settings::default()
    });
    let mut session = open_session(config_path, &user_settings)?;
    let export = session.export()?;

    let out = out
        .or_else(|| user_settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let written = if bundle {
        package::write_bundle(&out, &export)?
    } else {
        package::write_theme_files(&out, &ThemeFiles::from_export(&export)?)?;
        out
    };
    println!("exported {:?} to {}", export.manifest.name, written.display());

    if let Some(path) = config_path {
        if let Err(error) = settings::remember_theme(path.to_path_buf()) {
            log::warn!("could not record recent theme: {error}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn open_session(
    config_path: Option<&Path>,
    user_settings: &Settings,
) -> Result<ThemeSession, ThemeError> {
    let engine = match config_path {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            ThemeEngine::with_configuration(config::load(path)?)
        }
        None => ThemeEngine::new(),
    };
    Ok(ThemeSession::from_engine(engine, user_settings.history_capacity))
}
