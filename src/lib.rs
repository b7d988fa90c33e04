pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod registry;
pub mod report;
pub mod services;
pub mod strategy;

pub use adapters::{AlloyChainClient, ChainClient, Notifier};
pub use config::AppConfig;
pub use domain::{AirdropDefinition, ClaimOutcome, RunStatus, Target};
pub use error::{ClawError, Result};
pub use services::{RunReport, ScanService};
pub use strategy::{ClaimEngine, ScanResult};
