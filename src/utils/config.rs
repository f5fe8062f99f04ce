/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but cannot be parsed is logged and replaced by the
/// default. Surrounding whitespace is ignored.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable
///
/// Returns `None` when the variable is unset, empty or unparseable.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = env::var(env_var).ok()?;
    let val = val.trim();
    if val.is_empty() {
        return None;
    }
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring unparseable {}: {:?}", env_var, e);
            None
        }
    }
}
