use log::debug;
use thiserror::Error;

use super::types::{Motif, RawData};

/// Failure fetching from the query backend. Non-2xx bodies carry no defined
/// schema, so only the status code is kept.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("server returned status {0}")]
	Status(u16),
}

/// Bearer-token client for the fraud-graph backend.
pub struct ApiClient {
	base: String,
	http: reqwest::Client,
}

impl ApiClient {
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			http: reqwest::Client::new(),
		}
	}

	/// Base URL from the build environment, with a local-dev fallback.
	pub fn default_base() -> &'static str {
		option_env!("GRAPH_API_BASE").unwrap_or("http://localhost:8080")
	}

	/// `GET <base>/motifs`, the ordered motif catalog.
	pub async fn motifs(&self, token: &str) -> Result<Vec<Motif>, ApiError> {
		self.get_json(&format!("{}/motifs", self.base), token).await
	}

	/// `GET <base>/fraud-cycles[/{motif_id}]`, the raw subgraph for a motif.
	pub async fn fraud_cycles(
		&self,
		motif_id: Option<i64>,
		token: &str,
	) -> Result<RawData, ApiError> {
		let url = match motif_id {
			Some(id) => format!("{}/fraud-cycles/{}", self.base, id),
			None => format!("{}/fraud-cycles", self.base),
		};
		self.get_json(&url, token).await
	}

	async fn get_json<T: serde::de::DeserializeOwned>(
		&self,
		url: &str,
		token: &str,
	) -> Result<T, ApiError> {
		debug!("GET {url}");
		let res = self
			.http
			.get(url)
			.header("Authorization", format!("Bearer {token}"))
			.send()
			.await?;
		if !res.status().is_success() {
			return Err(ApiError::Status(res.status().as_u16()));
		}
		Ok(res.json().await?)
	}
}
