/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base address, baked in at build time from `API_URL`
    pub const API_URL: &'static str = match option_env!("API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Stand-in for the logged-in user until authentication exists
    pub const USER_ID: &'static str = "123";

    /// Number of meals requested by each load cycle
    pub const MEALS_LIMIT: u32 = 20;

    /// How long a success toast stays on screen (3 seconds)
    pub const TOAST_DURATION_MS: u32 = 3_000;
}
