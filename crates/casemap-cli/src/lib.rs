//! Library components of the `casemap` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod report;
