use serde::{Deserialize, Serialize};

/// Aggregate game statistics for one team, as returned by
/// `GET /game_statistics/team_id/{id}`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GameStatistics {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(default)]
    pub games: Vec<GameResult>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GameResult {
    pub opponent: String,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "playedAt")]
    pub played_at: Option<String>,
}

impl GameResult {
    pub fn outcome(&self) -> &'static str {
        if self.goals_for > self.goals_against {
            "W"
        } else if self.goals_for < self.goals_against {
            "L"
        } else {
            "D"
        }
    }
}
