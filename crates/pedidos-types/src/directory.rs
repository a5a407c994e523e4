//! Directory entities for order composition.
//!
//! Customers, sellers, and sellable products as served by the remote
//! directory lookups. Responses arrive with some field-name variance
//! across endpoints, so aliases normalize them once at deserialization;
//! the core never branches on shape ambiguity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer eligible to receive orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
	/// Server-assigned identifier.
	pub id: i64,
	/// Display name.
	#[serde(alias = "name")]
	pub nombre: String,
	/// Contact email.
	#[serde(default, alias = "correo")]
	pub email: String,
	/// Contact phone, if registered.
	#[serde(default, alias = "phone")]
	pub telefono: Option<String>,
}

/// A seller that can be attributed to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
	/// Server-assigned identifier.
	pub id: i64,
	/// Display name.
	#[serde(alias = "name")]
	pub nombre: String,
	/// Contact email.
	#[serde(default, alias = "correo")]
	pub email: String,
}

/// A sellable product with live stock information.
///
/// Immutable for the duration of a composition session: the cache
/// snapshot taken at form-open is the authoritative source for price
/// and stock checks until the next refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
	/// Server-assigned identifier.
	pub id: i64,
	/// Display name.
	#[serde(alias = "name")]
	pub nombre: String,
	/// Unit price, positive.
	#[serde(with = "rust_decimal::serde::float", alias = "precioUnitario")]
	pub precio: Decimal,
	/// Units currently available.
	#[serde(default, alias = "stockDisponible")]
	pub stock: u32,
}
