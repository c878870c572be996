use std::process;

use clap::{Arg, Command};

use coach_cli::commands::{handle_config, handle_plans, handle_stats};
use coach_cli::config::{BackendConfig, Platform};
use coach_cli::interactive::run_interactive_mode;
use coach_cli::logging::init_logging;

#[tokio::main]
async fn main() {
    let app = Command::new("coach")
        .about("Coach CLI - manage your sports team from the terminal")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("platform")
                .long("platform")
                .value_name("PLATFORM")
                .help("Runtime platform: host or android-emulator")
                .global(true),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .value_name("URL")
                .help("Backend base URL, overriding platform detection")
                .global(true),
        )
        .subcommand(
            Command::new("stats")
                .about("Show game statistics for a team")
                .arg(
                    Arg::new("team")
                        .value_name("TEAM_ID")
                        .help("Team identifier (defaults to the configured team)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: table, json")
                        .default_value("table"),
                ),
        )
        .subcommand(
            Command::new("plans")
                .about("Show training plans for a team")
                .arg(
                    Arg::new("team")
                        .value_name("TEAM_ID")
                        .help("Team identifier (defaults to the configured team)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: list, json")
                        .default_value("list"),
                ),
        )
        .subcommand(Command::new("interactive").about("Browse screens in the terminal UI"))
        .subcommand(
            Command::new("config")
                .about("Show or change saved configuration")
                .arg(
                    Arg::new("backend-url")
                        .long("backend-url")
                        .value_name("URL")
                        .help("Save a backend base URL"),
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .value_name("TEAM_ID")
                        .help("Save a default team identifier"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current configuration")
                        .action(clap::ArgAction::SetTrue),
                ),
        );

    let matches = app.get_matches();

    // Resolve the backend once; everything downstream gets an immutable value.
    let platform = matches
        .get_one::<String>("platform")
        .map(|name| Platform::from_name(name))
        .unwrap_or_default();
    let backend = BackendConfig::resolve(platform, matches.get_one::<String>("backend").map(|s| s.as_str()));

    let result = match matches.subcommand() {
        Some(("stats", sub_matches)) => handle_stats(sub_matches, &backend).await,
        Some(("plans", sub_matches)) => handle_plans(sub_matches, &backend).await,
        Some(("interactive", _)) => {
            let _ = init_logging();
            run_interactive_mode()
        }
        Some(("config", sub_matches)) => handle_config(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'coach --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
