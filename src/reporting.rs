//! Consumers of the hourly status record stream.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::sim::kpi::RunSummary;
use crate::sim::types::StatusRecord;

/// A collaborator that receives each status record in hour order.
pub trait Reporter {
    /// Handles the record for one simulated hour.
    fn report(&mut self, record: &StatusRecord) -> io::Result<()>;
}

/// Prints one line per hour, optionally pausing after each line.
///
/// The pause is purely cosmetic and has no effect on the simulation.
pub struct ConsoleReporter<W: Write> {
    out: W,
    throttle: Option<Duration>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            throttle: None,
        }
    }

    /// Sleeps for `delay` after each printed line.
    pub fn with_throttle(mut self, delay: Duration) -> Self {
        self.throttle = (!delay.is_zero()).then_some(delay);
        self
    }

    /// Prints the run summary block after a blank line.
    pub fn print_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "\n{summary}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, record: &StatusRecord) -> io::Result<()> {
        writeln!(self.out, "{record}")?;
        if let Some(delay) = self.throttle {
            self.out.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }
}

/// Ordered, append-only log of every record seen.
#[derive(Debug, Clone, Default)]
pub struct MonitoringLog {
    records: Vec<StatusRecord>,
}

impl MonitoringLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StatusRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[StatusRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&StatusRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Reporter for MonitoringLog {
    fn report(&mut self, record: &StatusRecord) -> io::Result<()> {
        self.push(*record);
        Ok(())
    }
}
