use nullnet_liberror::Error;

use crate::routes::pattern::RoutePattern;

/// Opaque references to the console views; the host view layer maps these to
/// actual screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    Connect,
    Settings,
    Device,
    DeviceStatus,
    DeviceAi,
    DeviceHistoric,
    DeviceStats,
    DeviceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub icon: String,
    /// Name of the route the entry navigates to.
    pub to: String,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub extra_menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: String,
    pub pattern: RoutePattern,
    pub view: View,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub fn new(path: &str, name: impl Into<String>, view: View) -> Result<Self, Error> {
        Ok(Self {
            name: name.into(),
            pattern: RoutePattern::parse(path)?,
            view,
            meta: RouteMeta::default(),
        })
    }

    pub fn requiring_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn with_extra_menu(mut self, items: Vec<MenuItem>) -> Self {
        self.meta.extra_menu_items = items;
        self
    }
}
