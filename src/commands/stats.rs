use clap::ArgMatches;

use super::resolve_team_id;
use crate::client::BackendClient;
use crate::config::BackendConfig;
use crate::formatting::output::print_statistics;

pub async fn handle_stats(
    matches: &ArgMatches,
    backend: &BackendConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let team_id = resolve_team_id(matches)?;
    let client = BackendClient::new(backend)?;

    let stats = client.game_statistics(&team_id).await?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print_statistics(&stats),
    }

    Ok(())
}
