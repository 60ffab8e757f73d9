use std::collections::VecDeque;

use devicehub_console::navigator::{LoadError, ViewLoader, DYNAMIC_IMPORT_FAILURE};
use devicehub_console::routes::{RouteDescriptor, View};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dynamic_import_error() -> LoadError {
    LoadError::new(format!(
        "{DYNAMIC_IMPORT_FAILURE}: /assets/DeviceStats-9c81d2.js"
    ))
}

/// Builds a navigable path from a descriptor's pattern.
pub fn concrete_path(descriptor: &RouteDescriptor) -> String {
    descriptor.pattern.as_str().replace(":id", "7")
}

/// Loader that replays scripted outcomes, then keeps succeeding.
#[derive(Default)]
pub struct ScriptedLoader {
    outcomes: VecDeque<Result<(), LoadError>>,
}

impl ScriptedLoader {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn scripted(outcomes: Vec<Result<(), LoadError>>) -> Self {
        Self {
            outcomes: outcomes.into(),
        }
    }
}

impl ViewLoader for ScriptedLoader {
    fn load(&mut self, _view: View) -> Result<(), LoadError> {
        self.outcomes.pop_front().unwrap_or(Ok(()))
    }
}
