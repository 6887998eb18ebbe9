//! Configuration loading for the pharmacy compliance engine.
//!
//! This module loads a pharmacy's seed data (identity, coverage rate,
//! roster, current week and recorded absences) from a directory of YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use pharmacy_compliance::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pharmacie-des-lilas").unwrap();
//! println!("Loaded pharmacy: {}", config.pharmacy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AbsencesConfig, PharmacyConfig, RosterConfig, ScheduleConfig, SeedConfig};
