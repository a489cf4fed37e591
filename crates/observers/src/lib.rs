//! Reusable observers for the epistep workspace.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `epistep-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`CanStopEarly`], [`HasTime`])
//! - [`PlotObserver`] — collects named traces during or after a run and
//!   renders them as a time chart
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver::show`], which opens a chart window via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: epistep_core::Observer
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`HasTime`]: traits::HasTime

pub mod traits;

mod plot;

pub use plot::{PlotObserver, Plottable, ShowConfig};

/// Error returned by [`PlotObserver::show`] when the chart window fails.
#[cfg(feature = "plot")]
pub use eframe::Error as ShowError;
