//! VelocityDRIVE Web Gateway
//!
//! HTTP front-end over the external `dr mup1cc` device-configuration CLI.

pub mod server;
pub mod static_page;

pub use server::{WebServer, WebServerConfig};
