//! Blocking JSON client for the collection API

use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

use crate::core::{Result, TagnetError};

const USER_AGENT: &str = concat!("tagnet/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a reusable HTTP client
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: Client,
}

impl ApiClient {
	pub fn new(timeout: Duration) -> Result<Self> {
		let http = Client::builder()
			.timeout(timeout)
			.user_agent(USER_AGENT)
			.build()
			.map_err(|e| TagnetError::Transport(format!("failed to build HTTP client: {}", e)))?;
		Ok(Self { http })
	}

	/// GET `endpoint` with query `params` and decode the JSON body.
	///
	/// No retries; a failed call is the caller's to count.
	pub fn get_api_data(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
		let response = self
			.http
			.get(endpoint)
			.query(params)
			.send()
			.map_err(|e| TagnetError::Transport(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(TagnetError::Transport(format!("{} returned {}", endpoint, status)));
		}

		let body = response
			.bytes()
			.map_err(|e| TagnetError::Transport(e.to_string()))?;
		serde_json::from_slice(&body).map_err(|e| TagnetError::Decode(e.to_string()))
	}
}
