use once_cell::sync::Lazy;

// project-level constants
pub const CONSOLE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_KEY_TOKEN: Option<&str> = option_env!("API_KEY_TOKEN");
pub const ENVIRONMENT: Option<&str> = option_env!("ENVIRONMENT");

// -------------------------------------------------------------------------------------------------

// api constants
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    // both branches resolve to the same host until a production URL is assigned
    if ENVIRONMENT == Some("production") {
        "http://localhost:8080".to_string()
    } else {
        "http://localhost:8080".to_string()
    }
});

// -------------------------------------------------------------------------------------------------

// session storage constants
pub const SESSION_FLAG_KEY: &str = "isLogged";
pub const SESSION_FLAG_SET: &str = "true";

pub const RELOAD_MARKER_KEY: &str = "vuetify:dynamic-reload";
pub const RELOAD_MARKER_SET: &str = "true";
