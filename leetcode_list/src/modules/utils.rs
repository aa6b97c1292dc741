use std::env;

/// Read a boolean switch from the environment. `1`, `true`, `yes` and `on` count as set.
pub fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Read an optional setting from the environment, treating an empty value as unset.
pub fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
