//! Kernel utilities shared across slices.
//! Keep this crate lightweight: today it only owns layered configuration loading.
//!
//! ```rust,no_run
//! use classkit_kernel::config::load_config;
//!
//! #[derive(Default, serde::Deserialize)]
//! struct AppConfig {
//!     seed: Option<u64>,
//! }
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! ```

pub mod config;
