use std::env;

use tracing::warn;

/// Runtime configuration, read once at startup.
///
/// A missing `DATABASE_URL` is not fatal: the storefront keeps serving the
/// menu and taking orders, it just cannot persist them.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

const DEFAULT_PORT: u16 = 8080;

impl Config {
    pub fn load() -> Self {
        Self {
            port: load_port(),
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn load_port() -> u16 {
    match env::var("FIORENTE_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid FIORENTE_PORT value {raw:?}: {e}, using default");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_unset() {
        env::remove_var("FIORENTE_PORT");
        assert_eq!(load_port(), DEFAULT_PORT);
    }
}
