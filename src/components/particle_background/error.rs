//! Error types for mounting the background.
//!
//! None of these ever reach the host application: the component logs them and
//! degrades to rendering nothing.

use std::fmt;

/// Errors that can occur while setting up the background.
#[derive(Debug, Clone, PartialEq)]
pub enum BackdropError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// The canvas 2D context could not be acquired.
	ContextUnavailable(String),
	/// A configuration value is out of range.
	InvalidConfig(String),
}

impl fmt::Display for BackdropError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BackdropError::NoWindow => write!(f, "No browser window available"),
			BackdropError::ContextUnavailable(msg) => {
				write!(f, "Canvas 2D context unavailable: {}", msg)
			}
			BackdropError::InvalidConfig(msg) => write!(f, "Invalid backdrop config: {}", msg),
		}
	}
}

impl std::error::Error for BackdropError {}
