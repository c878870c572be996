use serde::{Deserialize, Serialize};

/// One training plan for a team. `GET /training_plans/team_id/{id}` returns a
/// list of these.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrainingPlan {
    pub id: String,
    pub title: String,
    pub focus: Option<String>,
    #[serde(rename = "scheduledFor")]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub drills: Vec<Drill>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Drill {
    pub name: String,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: Option<u32>,
}
