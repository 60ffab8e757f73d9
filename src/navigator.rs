use std::fmt::{Display, Formatter};

use nullnet_liberror::{location, Error, ErrorHandler, Location};

use crate::constants::{RELOAD_MARKER_KEY, RELOAD_MARKER_SET};
use crate::routes::table::LOGIN_ROUTE;
use crate::routes::{console_routes, RouteDescriptor, RouteMatch, RouteTable, View};
use crate::session::{is_authenticated, SessionStore};

/// Error signature of a view chunk that could not be fetched.
pub const DYNAMIC_IMPORT_FAILURE: &str = "Failed to fetch dynamically imported module";

/// Failure reported by the view resolution boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_dynamic_import_failure(&self) -> bool {
        self.message.contains(DYNAMIC_IMPORT_FAILURE)
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Resolves a view reference to a mounted view. Implemented by the host view
/// layer; the navigator only consumes the outcome.
pub trait ViewLoader {
    fn load(&mut self, view: View) -> Result<(), LoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// The pre-navigation gate: a single synchronous storage read, no caching,
/// no expiry.
pub fn check_access<S: SessionStore>(target: &RouteDescriptor, session: &S) -> GuardDecision {
    if target.meta.requires_auth && !is_authenticated(session) {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Allow
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// The target route resolved and its view loaded.
    Done(RouteMatch),
    /// The target required authentication; the login route was loaded instead.
    Redirected(RouteMatch),
    /// The host must force a full page reload of the given path.
    Reload { full_path: String },
    /// The error was reported and the navigation abandoned.
    Aborted { message: String },
}

pub struct Navigator<S: SessionStore, L: ViewLoader> {
    table: RouteTable,
    session: S,
    loader: L,
    current: Option<RouteMatch>,
}

impl<S: SessionStore, L: ViewLoader> Navigator<S, L> {
    pub fn new(table: RouteTable, session: S, loader: L) -> Self {
        Self {
            table,
            session,
            loader,
            current: None,
        }
    }

    /// Navigator over the default console route surface.
    pub fn with_console_routes(session: S, loader: L) -> Result<Self, Error> {
        Ok(Self::new(console_routes()?, session, loader))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Resolves the path, runs the guard, and loads the target view.
    /// Unknown paths are an error; load failures go through the bounded
    /// reload recovery instead of propagating.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, Error> {
        let Some(target) = self.table.resolve(path) else {
            log::error!("No route matches path '{path}'");
            return Err("No route matches the requested path").handle_err(location!());
        };

        match check_access(&target.descriptor, &self.session) {
            GuardDecision::Allow => Ok(self.finish(target, false)),
            GuardDecision::RedirectToLogin => {
                log::debug!(
                    "Navigation to '{}' requires authentication, redirecting to login",
                    target.full_path
                );
                let Some(login) = self
                    .table
                    .get(LOGIN_ROUTE)
                    .and_then(|login| self.table.resolve(login.pattern.as_str()))
                else {
                    return Err("Route table has no login route to redirect to")
                        .handle_err(location!());
                };
                Ok(self.finish(login, true))
            }
        }
    }

    fn finish(&mut self, target: RouteMatch, redirected: bool) -> Navigation {
        match self.loader.load(target.descriptor.view) {
            Ok(()) => {
                // a completed resolution re-arms the one-shot reload recovery
                self.session.remove(RELOAD_MARKER_KEY);
                self.current = Some(target.clone());
                if redirected {
                    Navigation::Redirected(target)
                } else {
                    Navigation::Done(target)
                }
            }
            Err(err) => self.recover(&err, &target),
        }
    }

    fn recover(&mut self, err: &LoadError, target: &RouteMatch) -> Navigation {
        if err.is_dynamic_import_failure() {
            if self.session.get(RELOAD_MARKER_KEY).is_none() {
                log::info!("Reloading page to fix dynamic import error");
                self.session.set(RELOAD_MARKER_KEY, RELOAD_MARKER_SET);
                return Navigation::Reload {
                    full_path: target.full_path.clone(),
                };
            }
            log::error!("Dynamic import error, reloading page did not fix it: {err}");
        } else {
            log::error!("{err}");
        }
        Navigation::Aborted {
            message: err.message().to_string(),
        }
    }
}
