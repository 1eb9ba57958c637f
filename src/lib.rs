//! Aggregate views and a tabbed report model over a CSV of ICT
//! professionals' education, career and migration histories.
//!
//! The pipeline is linear: [`loader::load`] reads the table,
//! [`reports::compute_views`] and [`summary::generate_summary`] derive the
//! charts and KPIs, and [`dashboard::assemble`] arranges them into four tabs
//! that [`output`] prints or exports for a renderer.

pub mod cli;
pub mod dashboard;
pub mod error;
pub mod labels;
pub mod loader;
pub mod output;
pub mod reports;
pub mod summary;
pub mod types;
pub mod util;

pub use dashboard::{assemble, build_dashboard, Dashboard};
pub use error::{ExportError, LoadError};
pub use labels::{Labels, Language};
pub use loader::{load, read_dataset, LoadReport};
pub use reports::{compute_views, AggregateView, AggregateViews, ViewData, ViewKind};
pub use types::Dataset;
