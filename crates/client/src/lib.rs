//! HTTP client for the Rango fragment endpoints.
//!
//! The server renders small HTML fragments for three page interactions
//! (liking a category, suggesting categories, adding a page). This crate
//! issues those GET requests and returns the body verbatim as a [`Fragment`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

pub use client::RangoClient;
pub use client::builder::RangoClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{AddPageParams, Endpoint, EndpointRequest, Fragment};
