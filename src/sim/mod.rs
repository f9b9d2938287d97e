/// Hour clock driving the simulation loop.
pub mod clock;
pub mod controller;
pub mod engine;
pub mod kpi;
pub mod types;
