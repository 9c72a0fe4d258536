// Declare all our modules
mod client;
mod error;
mod models;
mod parsers;
mod throttle;

pub mod display;
pub mod filter;
pub mod logging;

// Publicly export the parts of our library that users will need
pub use client::SoundcloudClient;
pub use error::{ApiError, Result};
pub use models::*;
pub use parsers::credential::{extract_client_id, find_client_id, script_sources};
pub use throttle::{FixedDelay, Throttle};
