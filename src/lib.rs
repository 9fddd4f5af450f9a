//! zj: scaffold Vue or React projects from bundled templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InitOutcome, InitRequest, ScaffoldReport, StripSummary, init, init_with, init_with_templates,
};
pub use domain::{AppError, Framework};
