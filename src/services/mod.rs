pub mod scan;

pub use scan::{RunReport, ScanService};
