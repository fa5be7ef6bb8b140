//! Error types for dataset loading and graph validation.
//!
//! A failed load or a rejected graph is terminal for the view that owns the
//! dataset; other views keep rendering. All variants are `Clone` because the
//! per-view load result lives inside a reactive signal.

use thiserror::Error;

/// A dataset could not be fetched or decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
	/// The request never produced a response (network failure, no window, …).
	#[error("request for {url} failed: {reason}")]
	Request {
		/// Requested URL.
		url: String,
		/// Browser-reported failure reason.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("{url} returned HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The response body was not valid JSON for the expected shape.
	#[error("{url} is not a valid dataset: {reason}")]
	Parse {
		/// Requested URL.
		url: String,
		/// Decoder error text.
		reason: String,
	},
}

impl LoadError {
	pub(crate) fn request(url: &str, reason: impl Into<String>) -> Self {
		Self::Request {
			url: url.to_string(),
			reason: reason.into(),
		}
	}
}

/// A node-link graph failed semantic validation.
///
/// Raised before any matrix or simulation state is allocated, so a bad link
/// can never turn into an out-of-bounds write or a poisoned sum.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidGraphError {
	/// A link endpoint does not name a node.
	#[error("link {link} references node {index}, but the graph has {nodes} nodes")]
	LinkOutOfRange {
		/// Position of the offending link in the input.
		link: usize,
		/// The out-of-range endpoint.
		index: usize,
		/// Number of nodes in the graph.
		nodes: usize,
	},
	/// A link weight is negative or not a finite number.
	#[error("link {link} has invalid weight {value}")]
	BadWeight {
		/// Position of the offending link in the input.
		link: usize,
		/// The rejected weight.
		value: f64,
	},
}

/// Everything that can keep a view from rendering its dataset.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ViewError {
	/// The dataset never arrived or did not decode.
	#[error(transparent)]
	Load(#[from] LoadError),
	/// The dataset arrived but is not a usable graph.
	#[error(transparent)]
	Graph(#[from] InvalidGraphError),
}
