use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server settings. `DATABASE_URL` is the only required variable; it is also the
/// connection string used to apply migrations.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load from process environment after reading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: bind_raw.clone() })?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", value: v }),
            },
        };

        let run_migrations = match get("RUN_MIGRATIONS") {
            None => true,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid { key: "RUN_MIGRATIONS", value: v })?,
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            run_migrations,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply() {
        let cfg = load(&[("DATABASE_URL", "postgres://localhost/store")]).unwrap();
        assert_eq!(cfg.database_url, "postgres://localhost/store");
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.run_migrations);
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        assert!(matches!(load(&[("DATABASE_URL", "  ")]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = load(&[
            ("DATABASE_URL", "postgres://db/store"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("RUN_MIGRATIONS", "off"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_connections, 12);
        assert!(!cfg.run_migrations);
    }

    #[test]
    fn bad_values_are_rejected() {
        let url = ("DATABASE_URL", "postgres://db/store");
        assert!(matches!(
            load(&[url, ("BIND_ADDR", "nope")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            load(&[url, ("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            load(&[url, ("RUN_MIGRATIONS", "maybe")]),
            Err(ConfigError::Invalid { key: "RUN_MIGRATIONS", .. })
        ));
    }
}
