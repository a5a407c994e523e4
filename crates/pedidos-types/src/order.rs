//! Order entities and the creation wire payload.
//!
//! The `Order` struct is the canonical client-side view of a persisted
//! order. The orders API is loose about field names (`fecha` vs
//! `fechaPedido`, `estado` vs `status`), so aliases normalize responses
//! once here. `OrderPayload` is the exact shape the assembler emits for
//! `POST /pedidos`; unit prices serialize as plain JSON numbers with
//! two-decimal precision.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::OrderStatus;

/// A persisted order as returned by the orders API.
///
/// Owned by the lifecycle store for the duration of a session and
/// mutated only by replacing it wholesale with a server-confirmed copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
	/// Server-assigned identifier.
	pub id: i64,
	/// Customer the order belongs to.
	#[serde(rename = "clienteId", alias = "cliente_id", default)]
	pub cliente_id: Option<i64>,
	/// Seller attributed to the order, if any.
	#[serde(rename = "vendedorId", alias = "vendedor_id", default)]
	pub vendedor_id: Option<i64>,
	/// Timestamp the order was placed.
	#[serde(rename = "fechaPedido", alias = "fecha", default)]
	pub fecha_pedido: Option<NaiveDateTime>,
	/// Free-text notes captured at composition time.
	#[serde(default)]
	pub notas: String,
	/// Line items, immutable once the order exists.
	#[serde(default, alias = "items")]
	pub detalles: Vec<OrderLine>,
	/// Server-computed total.
	#[serde(with = "rust_decimal::serde::float", default)]
	pub total: Decimal,
	/// Current lifecycle status.
	#[serde(alias = "status")]
	pub estado: OrderStatus,
}

/// One line item of a persisted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
	/// Product the line refers to.
	#[serde(rename = "productoId", alias = "producto_id")]
	pub producto_id: i64,
	/// Units ordered.
	pub cantidad: u32,
	/// Unit price frozen at order time.
	#[serde(
		rename = "precioUnitario",
		alias = "precio_unitario",
		with = "rust_decimal::serde::float"
	)]
	pub precio_unitario: Decimal,
}

/// Canonical order-creation payload.
///
/// This is the wire contract the composition engine guarantees it
/// emits: `vendedorId` is serialized as an explicit `null` when no
/// seller is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
	#[serde(rename = "clienteId")]
	pub cliente_id: i64,
	#[serde(rename = "vendedorId")]
	pub vendedor_id: Option<i64>,
	pub notas: String,
	pub detalles: Vec<PayloadLine>,
}

/// One line entry of the creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadLine {
	#[serde(rename = "productoId")]
	pub producto_id: i64,
	pub cantidad: u32,
	#[serde(rename = "precioUnitario", with = "rust_decimal::serde::float")]
	pub precio_unitario: Decimal,
}
