use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub sync: SyncConfig,
    pub ledger: LedgerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub auto_sync: bool,
    pub interval_minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub default_currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/ledger.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            sync: SyncConfig {
                auto_sync: true,
                interval_minutes: 5,
            },
            ledger: LedgerConfig {
                default_currency: "PKR".to_string(),
            },
            storage: StorageConfig {
                data_dir: default_data_dir(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("LEDGER_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v;
            }
        }
        if let Ok(v) = std::env::var("LEDGER_MAX_CONNECTIONS") {
            if let Some(value) = parse_u32(&v) {
                cfg.database.max_connections = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("LEDGER_AUTO_SYNC") {
            cfg.sync.auto_sync = parse_bool(&v, cfg.sync.auto_sync);
        }
        if let Ok(v) = std::env::var("LEDGER_SYNC_INTERVAL_MINUTES") {
            if let Some(value) = parse_u64(&v) {
                cfg.sync.interval_minutes = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("LEDGER_DEFAULT_CURRENCY") {
            if !v.trim().is_empty() {
                cfg.ledger.default_currency = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("LEDGER_DATA_DIR") {
            if !v.trim().is_empty() {
                cfg.storage.data_dir = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.sync.interval_minutes == 0 {
            return Err("Sync interval_minutes must be greater than 0".to_string());
        }
        if self.ledger.default_currency.trim().is_empty() {
            return Err("Ledger default_currency must not be empty".to_string());
        }
        Ok(())
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("donation-ledger").to_string_lossy().into_owned())
        .unwrap_or_else(|| "./data".to_string())
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.ledger.default_currency, "PKR");
        assert_eq!(cfg.sync.interval_minutes, 5);
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut cfg = AppConfig::default();
        cfg.sync.interval_minutes = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parse_bool_falls_back_to_default() {
        assert!(parse_bool("yes", false));
        assert!(!parse_bool("off", true));
        assert!(parse_bool("garbage", true));
    }
}
