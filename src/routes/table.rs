use std::collections::HashMap;

use indexmap::IndexMap;
use nullnet_liberror::{location, Error, ErrorHandler, Location};

use crate::routes::descriptor::{MenuItem, RouteDescriptor, View};

// route names
pub const LOGIN_ROUTE: &str = "Login";
pub const DASHBOARD_ROUTE: &str = "Dashboard";
pub const CONNECT_ROUTE: &str = "Connect";
pub const SETTINGS_ROUTE: &str = "Settings";
pub const DEVICE_ROUTE: &str = "Device";
pub const DEVICE_STATUS_ROUTE: &str = "DeviceStatus";
pub const DEVICE_AI_ROUTE: &str = "DeviceAI";
pub const DEVICE_HISTORIC_ROUTE: &str = "DeviceHistoric";
pub const DEVICE_NERD_ROUTE: &str = "DeviceNerd";
pub const DEVICE_SETTINGS_ROUTE: &str = "DeviceSettings";

/// A navigation target resolved against the route table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub descriptor: RouteDescriptor,
    pub params: HashMap<String, String>,
    /// The concrete path the navigation was requested with.
    pub full_path: String,
}

/// The route table is built once at startup and is immutable afterwards.
/// Route names are unique; declaration order decides path resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: IndexMap<String, RouteDescriptor>,
}

impl RouteTable {
    pub fn new(descriptors: Vec<RouteDescriptor>) -> Result<Self, Error> {
        let mut routes = IndexMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let name = descriptor.name.clone();
            if routes.insert(name.clone(), descriptor).is_some() {
                log::error!("Route name '{name}' is declared more than once");
                return Err("Found duplicate route name in route table").handle_err(location!());
            }
        }
        Ok(Self { routes })
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.get(name)
    }

    /// Resolves a concrete path to the first matching descriptor, in
    /// declaration order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.values().find_map(|descriptor| {
            descriptor.pattern.matches(path).map(|params| RouteMatch {
                descriptor: descriptor.clone(),
                params,
                full_path: path.to_string(),
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn device_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Status", "mdi-information-slab-circle", DEVICE_STATUS_ROUTE),
        MenuItem::new("A.I.", "mdi-robot-happy", DEVICE_AI_ROUTE),
        MenuItem::new("Histórico", "mdi-history", DEVICE_HISTORIC_ROUTE),
        MenuItem::new("Estatística", "mdi-chart-box-outline", DEVICE_NERD_ROUTE),
        MenuItem::new("Configurações", "mdi-list-status", DEVICE_SETTINGS_ROUTE),
    ]
}

/// The console's route surface. Everything except the login entry requires
/// authentication; the device pages share the extra menu entries.
pub fn console_routes() -> Result<RouteTable, Error> {
    let menu = device_menu_items();

    RouteTable::new(vec![
        RouteDescriptor::new("/", LOGIN_ROUTE, View::Login)?,
        RouteDescriptor::new("/dashboard", DASHBOARD_ROUTE, View::Dashboard)?.requiring_auth(),
        RouteDescriptor::new("/connect", CONNECT_ROUTE, View::Connect)?.requiring_auth(),
        RouteDescriptor::new("/settings", SETTINGS_ROUTE, View::Settings)?.requiring_auth(),
        RouteDescriptor::new("/device/:id", DEVICE_ROUTE, View::Device)?
            .requiring_auth()
            .with_extra_menu(menu.clone()),
        RouteDescriptor::new("/device/:id/status", DEVICE_STATUS_ROUTE, View::DeviceStatus)?
            .requiring_auth()
            .with_extra_menu(menu.clone()),
        // the path spelling below is the published URL
        RouteDescriptor::new(
            "/device/:id/artificial-inteligence",
            DEVICE_AI_ROUTE,
            View::DeviceAi,
        )?
        .requiring_auth()
        .with_extra_menu(menu.clone()),
        RouteDescriptor::new(
            "/device/:id/historic",
            DEVICE_HISTORIC_ROUTE,
            View::DeviceHistoric,
        )?
        .requiring_auth()
        .with_extra_menu(menu.clone()),
        // the statistics view is mounted under the /nerd path
        RouteDescriptor::new("/device/:id/nerd", DEVICE_NERD_ROUTE, View::DeviceStats)?
            .requiring_auth()
            .with_extra_menu(menu.clone()),
        RouteDescriptor::new(
            "/device/:id/settings",
            DEVICE_SETTINGS_ROUTE,
            View::DeviceSettings,
        )?
        .requiring_auth()
        .with_extra_menu(menu),
    ])
}
