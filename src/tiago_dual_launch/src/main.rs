//! tiago_dual_launch CLI

use clap::{Parser, Subcommand};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};
use tiago_dual_launch::{
    compose_launch,
    descriptions::{find_description, LaunchDescription},
    error::LaunchError,
    package::PackageLocator,
    ComposerOptions,
};

#[derive(Parser)]
#[command(name = "tiago_dual_launch")]
#[command(about = "Launch composer for the TIAGo Dual robot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a launch description and write its record
    Launch {
        /// Package name
        package: String,

        /// Launch file name
        file: String,

        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,

        /// Additional install prefix searched before AMENT_PREFIX_PATH
        #[arg(long = "prefix")]
        prefixes: Vec<PathBuf>,

        /// Directory for generated parameter files (default: system temp dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Show the arguments declared by a launch description
    ShowArgs {
        /// Package name
        package: String,

        /// Launch file name
        file: String,
    },
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    match s.split_once(":=") {
        Some((name, value)) if !name.is_empty() && !value.contains(":=") => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid launch argument format: {}", s)),
    }
}

fn find(package: &str, file: &str) -> Result<&'static LaunchDescription, LaunchError> {
    find_description(package, file).ok_or_else(|| LaunchError::UnknownDescription {
        package: package.to_string(),
        file: file.to_string(),
    })
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Launch {
            package,
            file,
            args,
            output,
            prefixes,
            output_dir,
        } => {
            log::info!("Composing launch file: {} from package {}", file, package);
            let options = ComposerOptions {
                locator: PackageLocator::from_env(prefixes),
                output_dir: output_dir.unwrap_or_else(std::env::temp_dir),
            };
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            compose_and_write(&package, &file, cli_args, options, &output)
        }
        Commands::ShowArgs { package, file } => find(&package, &file).map(print_arguments),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn compose_and_write(
    package: &str,
    file: &str,
    cli_args: HashMap<String, String>,
    options: ComposerOptions,
    output: &Path,
) -> Result<(), LaunchError> {
    let record = compose_launch(package, file, cli_args, options)?;

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated record: {}", output.display());
    log::info!(
        "  {} includes, {} nodes",
        record.include.len(),
        record.node.len()
    );

    Ok(())
}

fn print_arguments(description: &LaunchDescription) {
    println!("Arguments (pass arguments as '<name>:=<value>'):");
    for decl in &description.arguments {
        println!();
        println!("    '{}':", decl.name);
        println!("        {}", decl.description);
        let choices = decl.choices();
        if !choices.is_empty() {
            println!("        Valid choices are: [{}]", choices.join(", "));
        }
        println!("        (default: '{}')", decl.default);
    }
}
