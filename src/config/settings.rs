use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "game_scorekeeper.db".to_string(),
            pool_size: 8,
            busy_timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Header the upstream identity proxy puts the signed-in user into.
    pub identity_header: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            identity_header: "x-authenticated-user".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH`, `DB_POOL_SIZE`,
    /// `DB_BUSY_TIMEOUT_MS` and `IDENTITY_HEADER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("DATABASE_PATH").filter(|p| !p.trim().is_empty()) {
            config.database.path = path;
        }
        override_parsed(&lookup, "DB_POOL_SIZE", &mut config.database.pool_size);
        override_parsed(&lookup, "DB_BUSY_TIMEOUT_MS", &mut config.database.busy_timeout_ms);
        if let Some(header) = lookup("IDENTITY_HEADER").filter(|h| !h.trim().is_empty()) {
            config.auth.identity_header = header.trim().to_ascii_lowercase();
        }

        config
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => log::warn!("Ignoring {}={:?}: not a valid value", key, raw),
    }
}
