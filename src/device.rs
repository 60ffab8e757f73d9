use nullnet_liberror::{location, Error, ErrorHandler, Location};
use serde::{Deserialize, Serialize};

/// A device registered with the console, as served by the device API.
///
/// Wire payloads carry `push_name` and `business_name` in snake case;
/// fields the front end does not consume (e.g. `timestamp`) are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub number: String,
    pub push_name: String,
    pub business_name: String,
    pub contacts: u32,
}

impl Device {
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(payload).handle_err(location!())
    }
}
