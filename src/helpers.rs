pub fn get_env(key: &str, default: &str, description: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            log::warn!("{description} not found in the environment; using default value");
            default.to_string()
        }
    }
}
