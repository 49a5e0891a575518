use std::env;

use crate::constants::envvars;

/// Load `.env` from the working directory, then `$MHI_IR_HOME/.env` if set.
///
/// Runs before logging is up, so the loaded files are returned for the
/// caller to report.
pub fn load_dotenv() -> Vec<String> {
    let mut loaded = Vec::new();
    if dotenv::dotenv().is_ok() {
        loaded.push(".env".to_string());
    }
    if let Ok(home) = env::var(envvars::HOME) {
        let home_dotenv = format!("{home}/.env");
        if dotenv::from_path(&home_dotenv).is_ok() {
            loaded.push(home_dotenv);
        }
    }
    loaded
}
