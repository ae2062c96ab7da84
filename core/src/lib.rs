//! # apsentry core
//!
//! The scan ingestion and classification engine of the rogue access point detector.
//!
//! * **[`registry`]**: authorized and known BSSID/SSID pairs, SSID protection levels.
//! * **[`parser`]**: turns a wireless scan dump into access point observations.
//! * **[`classifier`]**: ordered rule table, one finding per observation.
//! * **[`report`]**: findings bucketed by severity plus run counters.
//! * **[`audit`]**: the pipeline tying the four together.
//!
//! Everything here is synchronous and free of global state. The only I/O is reading a
//! registry file when asked to through [`registry::Registry::load_file`].

pub mod audit;
pub mod classifier;
pub mod parser;
pub mod registry;
pub mod report;
pub mod vendors;
