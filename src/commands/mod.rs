pub mod config;
pub mod plans;
pub mod stats;

pub use config::handle_config;
pub use plans::handle_plans;
pub use stats::handle_stats;

use clap::ArgMatches;

use crate::config::load_config;
use crate::error::CoachError;

/// Team id from the command line, falling back to the configured default.
pub(crate) fn resolve_team_id(matches: &ArgMatches) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(team) = matches.get_one::<String>("team") {
        return Ok(team.clone());
    }

    load_config().default_team_id.ok_or_else(|| {
        CoachError::ConfigError(
            "No team specified and no default team configured. Run 'coach config --team <TEAM_ID>'."
                .to_string(),
        )
        .into()
    })
}
