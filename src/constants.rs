/// Backend reached from inside the Android emulator, which maps the host
/// loopback to 10.0.2.2.
pub const EMULATOR_BASE_URL: &str = "http://10.0.2.2:3000";

/// Backend reached from the host machine (desktop simulator, plain terminal).
pub const HOST_BASE_URL: &str = "http://localhost:3000";

/// Environment variable that overrides the resolved base address.
pub const BACKEND_URL_ENV: &str = "COACH_BACKEND_URL";

pub const CONFIG_FILE: &str = ".coach-cli-config.json";

// Resource path templates, team-scoped. The team identifier is appended as
// the final path segment.
pub const GAME_STATISTICS_PATH: &str = "/game_statistics/team_id";
pub const TRAINING_PLANS_PATH: &str = "/training_plans/team_id";
