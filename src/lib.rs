//! Core routing and data-model layer for the DeviceHub device-management console.

pub mod api;
pub mod constants;
pub mod device;
pub mod helpers;
pub mod navigator;
pub mod routes;
pub mod session;
