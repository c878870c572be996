use clap::ArgMatches;

use super::resolve_team_id;
use crate::client::BackendClient;
use crate::config::BackendConfig;
use crate::formatting::output::print_plans;

pub async fn handle_plans(
    matches: &ArgMatches,
    backend: &BackendConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let team_id = resolve_team_id(matches)?;
    let client = BackendClient::new(backend)?;

    let plans = client.training_plans(&team_id).await?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("list");

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if plans.is_empty() {
        println!("No training plans found for team {}.", team_id);
    } else {
        println!("Found {} training plans:", plans.len());
        print_plans(&plans);
    }

    Ok(())
}
