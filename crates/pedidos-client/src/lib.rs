//! Remote collaborator module for the pedidos client.
//!
//! This module defines the interfaces the composition engine consumes
//! to reach the backend: directory lookups for reference data and the
//! order submission/lifecycle endpoints. The core depends only on the
//! traits here; the HTTP implementation lives under `implementations`.

use async_trait::async_trait;
use pedidos_types::{Customer, Order, OrderPayload, OrderStatus, Product, Seller};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod http;
}

pub use implementations::http::{ApiClient, HttpApi};

/// Errors that can occur when talking to the backend.
///
/// `Http` carries the human-readable message extracted from the remote
/// error body so callers can surface it verbatim to the operator.
#[derive(Debug, Error)]
pub enum ClientError {
	/// The server answered with a non-success status.
	#[error("{message}")]
	Http {
		/// HTTP status code of the response.
		status: u16,
		/// Message extracted from the response body, or a generic
		/// fallback when the body carried none.
		message: String,
	},
	/// The request never produced a response.
	#[error("Error de conexión: {0}")]
	Network(String),
	/// The response body could not be decoded into the expected shape.
	#[error("Respuesta inválida del servidor: {0}")]
	Decode(String),
}

/// Which slice of the order set to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
	/// Every order visible to elevated roles.
	All,
	/// Orders attributed to one seller.
	Seller(i64),
	/// Orders belonging to one customer.
	Customer(i64),
	/// Orders currently in one status.
	Status(OrderStatus),
}

/// Trait defining the directory lookups used to build the reference
/// data cache.
///
/// Implementations must tolerate partial failure at the call site: a
/// failed lookup is reported as an error for that list only, and the
/// caller degrades it to an empty list without aborting the others.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
	/// Lists customers eligible to receive orders.
	async fn list_customers(&self) -> Result<Vec<Customer>, ClientError>;

	/// Lists sellers available for assignment.
	async fn list_sellers(&self) -> Result<Vec<Seller>, ClientError>;

	/// Lists products that currently have stock.
	async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
}

/// Trait defining the order submission and lifecycle endpoints.
#[async_trait]
pub trait OrderApi: Send + Sync {
	/// Submits a creation payload and returns the persisted order.
	async fn submit_order(&self, payload: &OrderPayload) -> Result<Order, ClientError>;

	/// Requests a status change and returns the updated order.
	async fn update_order_status(
		&self,
		order_id: i64,
		status: OrderStatus,
	) -> Result<Order, ClientError>;

	/// Fetches a single order afresh.
	async fn fetch_order(&self, order_id: i64) -> Result<Order, ClientError>;

	/// Fetches the orders within the given scope.
	async fn fetch_orders(&self, scope: OrderScope) -> Result<Vec<Order>, ClientError>;
}
