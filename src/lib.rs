//! Weather lookup for Jiangxi province.
//!
//! Resolves a short location id to coordinates, queries Open-Meteo once and
//! reshapes the answer into a localized report, served over HTTP or MCP.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod locations;
pub mod models;
pub mod service;
pub mod tools;
pub mod web;

pub use config::{Cli, Commands, ServeArgs, ServiceConfig};
pub use error::WeatherError;
pub use models::WeatherReport;
pub use service::WeatherService;
