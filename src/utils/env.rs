use std::env;
use std::str::FromStr;

use crate::config::ConfigError;

/// Returns the value of `name`, treating an unset or blank variable as absent.
pub fn get_optional_environment_variable(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Returns the value of `name`, or an empty string with a warning when it is not set.
///
/// Missing queue settings are not fatal: the queue service rejects the first call that needs
/// them and the error reaches the caller like any other operation error.
pub fn get_environment_variable_or_warn(name: &str) -> String {
    get_optional_environment_variable(name).unwrap_or_else(|| {
        tracing::warn!("{} is not set, queue calls depending on it will fail", name);
        String::new()
    })
}

pub fn parse_environment_variable<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match get_optional_environment_variable(name) {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
