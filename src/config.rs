//! Runtime configuration from the environment.

/// Caps the number of subnet rows printed; 0 or unset prints them all.
pub const MAX_ROWS_VAR: &str = "SUBNET_PLAN_MAX_ROWS";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_rows: Option<usize>,
}

impl Config {
    /// Read the configuration from the environment. `.env` files are
    /// loaded into the environment by the binary before this runs.
    pub fn from_env() -> Config {
        Config {
            max_rows: parse_max_rows(std::env::var(MAX_ROWS_VAR).ok().as_deref()),
        }
    }

    /// Apply the command line row cap on top; the flag wins over the
    /// environment, and an explicit 0 lifts the cap.
    pub fn with_max_rows(self, cli_rows: Option<usize>) -> Config {
        match cli_rows {
            Some(0) => Config { max_rows: None },
            Some(rows) => Config {
                max_rows: Some(rows),
            },
            None => self,
        }
    }
}

fn parse_max_rows(value: Option<&str>) -> Option<usize> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(0) => None,
        Ok(rows) => Some(rows),
        Err(_) => {
            log::warn!("ignoring {MAX_ROWS_VAR}={raw:?}, not a row count");
            None
        }
    }
}
