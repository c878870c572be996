use clap::ArgMatches;

use crate::config::{load_config, save_config};

pub fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("backend-url") {
        config.backend_url = Some(url.clone());
        changed = true;
    }
    if let Some(team) = matches.get_one::<String>("team") {
        config.default_team_id = Some(team.clone());
        changed = true;
    }

    if changed {
        save_config(&config)?;
        println!("Configuration saved.");
    }

    if matches.get_flag("show") || !changed {
        println!(
            "Backend URL: {}",
            config.backend_url.as_deref().unwrap_or("(platform default)")
        );
        println!(
            "Default team: {}",
            config.default_team_id.as_deref().unwrap_or("(none)")
        );
    }

    Ok(())
}
