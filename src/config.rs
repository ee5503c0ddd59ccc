use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    /// Upper bound on events fetched per user for a single report.
    pub max_events_per_user: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_events_per_user: env::var("MAX_EVENTS_PER_USER")
                .unwrap_or_else(|_| "1000".into())
                .parse()
                .expect("MAX_EVENTS_PER_USER must be a number"),
        }
    }
}
