/// CSV export of status records.
pub mod export;
