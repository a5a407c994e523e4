//! HTTP implementation of the directory and order collaborators.
//!
//! A thin wrapper over `reqwest` that attaches the bearer token when
//! one is set, decodes successful responses as JSON, and extracts a
//! human-readable message from error bodies. Error bodies arrive in
//! several shapes (`message`, `error`, `detail`, or an `errors` array);
//! extraction happens once here so callers only see `ClientError`.

use crate::{ClientError, DirectoryApi, OrderApi, OrderScope};
use async_trait::async_trait;
use pedidos_config::ApiConfig;
use pedidos_types::{Customer, Order, OrderPayload, OrderStatus, Product, Seller};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
	base_url: String,
	token: Option<String>,
	http: reqwest::Client,
}

impl ApiClient {
	/// Creates a client with default settings against a base URL.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into().trim_end_matches('/').to_string(),
			token: None,
			http: reqwest::Client::new(),
		}
	}

	/// Creates a client from the API configuration section.
	pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
		let http = reqwest::Client::builder()
			.timeout(Duration::from_secs(config.timeout_secs))
			.build()
			.map_err(|e| ClientError::Network(e.to_string()))?;
		Ok(Self {
			base_url: config.base_url.trim_end_matches('/').to_string(),
			token: config.token.clone(),
			http,
		})
	}

	/// Replaces the bearer token attached to subsequent requests.
	pub fn set_token(&mut self, token: Option<String>) {
		self.token = token;
	}

	fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
		let url = format!("{}{}", self.base_url, path);
		debug!(%method, %url, "api request");
		let mut builder = self.http.request(method, url);
		if let Some(token) = &self.token {
			builder = builder.bearer_auth(token);
		}
		builder
	}

	async fn send<T: DeserializeOwned>(
		&self,
		builder: reqwest::RequestBuilder,
	) -> Result<T, ClientError> {
		let response = builder
			.send()
			.await
			.map_err(|e| ClientError::Network(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			let message = extract_error_message(&body)
				.unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
			warn!(status = status.as_u16(), %message, "api request failed");
			return Err(ClientError::Http {
				status: status.as_u16(),
				message,
			});
		}

		response
			.json::<T>()
			.await
			.map_err(|e| ClientError::Decode(e.to_string()))
	}

	/// Performs a GET request and decodes the JSON response.
	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
		self.send(self.request(reqwest::Method::GET, path)).await
	}

	/// Performs a POST request with a JSON body.
	pub async fn post<T: DeserializeOwned, B: Serialize>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, ClientError> {
		self.send(self.request(reqwest::Method::POST, path).json(body))
			.await
	}

	/// Performs a bodyless PUT request, used by the status endpoint
	/// which takes its argument as a query parameter.
	pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
		self.send(self.request(reqwest::Method::PUT, path)).await
	}
}

/// Extracts a human-readable error message from a response body.
///
/// Tries, in order: `message`, `error`, `detail`, a joined `errors`
/// array, a bare JSON string, then the raw body text. Returns `None`
/// for an empty body.
pub fn extract_error_message(body: &str) -> Option<String> {
	if body.trim().is_empty() {
		return None;
	}

	if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
		for key in ["message", "error", "detail"] {
			if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
				return Some(text.to_string());
			}
		}
		if let Some(errors) = value.get("errors").and_then(|v| v.as_array()) {
			let joined: Vec<&str> = errors.iter().filter_map(|e| e.as_str()).collect();
			if !joined.is_empty() {
				return Some(joined.join(", "));
			}
		}
		if let Some(text) = value.as_str() {
			return Some(text.to_string());
		}
	}

	Some(body.trim().to_string())
}

/// List responses arrive either as a bare array or wrapped in a
/// `{ "data": [...] }` envelope depending on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
	Data { data: Vec<T> },
	Plain(Vec<T>),
}

impl<T> ListEnvelope<T> {
	fn into_vec(self) -> Vec<T> {
		match self {
			ListEnvelope::Data { data } => data,
			ListEnvelope::Plain(items) => items,
		}
	}
}

/// The production implementation of both collaborator traits.
#[derive(Debug, Clone)]
pub struct HttpApi {
	client: ApiClient,
}

impl HttpApi {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}
}

#[async_trait]
impl DirectoryApi for HttpApi {
	async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
		let envelope: ListEnvelope<Customer> = self.client.get("/clientes/para-pedidos").await?;
		Ok(envelope.into_vec())
	}

	async fn list_sellers(&self) -> Result<Vec<Seller>, ClientError> {
		let envelope: ListEnvelope<Seller> =
			self.client.get("/vendedores/para-asignacion").await?;
		Ok(envelope.into_vec())
	}

	async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
		let envelope: ListEnvelope<Product> = self.client.get("/productos/con-stock").await?;
		Ok(envelope.into_vec())
	}
}

#[async_trait]
impl OrderApi for HttpApi {
	async fn submit_order(&self, payload: &OrderPayload) -> Result<Order, ClientError> {
		self.client.post("/pedidos", payload).await
	}

	async fn update_order_status(
		&self,
		order_id: i64,
		status: OrderStatus,
	) -> Result<Order, ClientError> {
		let path = format!("/pedidos/{}/estado?nuevoEstado={}", order_id, status.as_str());
		self.client.put_empty(&path).await
	}

	async fn fetch_order(&self, order_id: i64) -> Result<Order, ClientError> {
		self.client.get(&format!("/pedidos/{}", order_id)).await
	}

	async fn fetch_orders(&self, scope: OrderScope) -> Result<Vec<Order>, ClientError> {
		let path = match scope {
			OrderScope::All => "/pedidos".to_string(),
			OrderScope::Seller(id) => format!("/pedidos/vendedor/{}", id),
			OrderScope::Customer(id) => format!("/pedidos/cliente/{}", id),
			OrderScope::Status(status) => format!("/pedidos/estado/{}", status.as_str()),
		};
		let envelope: ListEnvelope<Order> = self.client.get(&path).await?;
		Ok(envelope.into_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	#[test]
	fn extracts_message_field_first() {
		let body = r#"{"message": "Stock insuficiente", "error": "ignored"}"#;
		assert_eq!(
			extract_error_message(body),
			Some("Stock insuficiente".to_string())
		);
	}

	#[test]
	fn falls_back_through_known_fields() {
		assert_eq!(
			extract_error_message(r#"{"error": "Cliente no encontrado"}"#),
			Some("Cliente no encontrado".to_string())
		);
		assert_eq!(
			extract_error_message(r#"{"detail": "Pedido no existe"}"#),
			Some("Pedido no existe".to_string())
		);
		assert_eq!(
			extract_error_message(r#"{"errors": ["uno", "dos"]}"#),
			Some("uno, dos".to_string())
		);
	}

	#[test]
	fn uses_raw_body_when_not_json() {
		assert_eq!(
			extract_error_message("Internal Server Error"),
			Some("Internal Server Error".to_string())
		);
		assert_eq!(extract_error_message("   "), None);
	}

	#[test]
	fn list_envelope_accepts_both_shapes() {
		let plain: ListEnvelope<Product> =
			serde_json::from_str(r#"[{"id": 1, "nombre": "Mouse", "precio": 9.99, "stock": 3}]"#)
				.unwrap();
		assert_eq!(plain.into_vec().len(), 1);

		let wrapped: ListEnvelope<Product> = serde_json::from_str(
			r#"{"data": [{"id": 1, "nombre": "Mouse", "precio": 9.99, "stock": 3}]}"#,
		)
		.unwrap();
		let products = wrapped.into_vec();
		assert_eq!(products[0].precio, dec!(9.99));
	}
}
