use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self {
            path: env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PairingSettings {
    pub avoid_rematches: bool,
}

impl Default for PairingSettings {
    fn default() -> Self {
        Self {
            avoid_rematches: true,
        }
    }
}

impl PairingSettings {
    pub fn from_env() -> Self {
        let avoid_rematches = env::var("SWISS_AVOID_REMATCHES")
            .ok()
            .and_then(|value| parse_flag(&value))
            .unwrap_or(true);
        Self { avoid_rematches }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub pairing: PairingSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            pairing: PairingSettings::from_env(),
            server: ServerSettings::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

// Passed explicitly to whoever needs it; nothing reads config through globals.

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
