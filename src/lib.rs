//! Energy balance of a solar-powered charging station under the lunar day/night cycle.

pub mod cli;
pub mod config;
pub mod devices;
pub mod io;
pub mod logging;
pub mod reporting;
/// Simulation engine, charge controller, clock, and run summary.
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
