//! Order status enumeration.
//!
//! Wire values are the upper-snake Spanish states used by the orders
//! API (`PENDIENTE`, `EN_PROCESO`, `ENTREGADO`, `CANCELADO`). Legality
//! of transitions between states lives in the core's status machine;
//! this type only carries identity and display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an order in its lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
	/// Order has been accepted by the server but not yet worked.
	Pendiente,
	/// Order is being prepared.
	EnProceso,
	/// Order has been delivered. Terminal.
	Entregado,
	/// Order was cancelled. Terminal.
	Cancelado,
}

impl OrderStatus {
	/// Wire representation, as sent in the status-update query.
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Pendiente => "PENDIENTE",
			OrderStatus::EnProceso => "EN_PROCESO",
			OrderStatus::Entregado => "ENTREGADO",
			OrderStatus::Cancelado => "CANCELADO",
		}
	}

	/// Human-readable label for tables and steppers.
	pub fn label(&self) -> &'static str {
		match self {
			OrderStatus::Pendiente => "Pendiente",
			OrderStatus::EnProceso => "En Proceso",
			OrderStatus::Entregado => "Entregado",
			OrderStatus::Cancelado => "Cancelado",
		}
	}

	/// The linear happy-path progression shown by the order stepper.
	///
	/// `Cancelado` is an abort, not a step, so it is not part of the
	/// progression.
	pub fn progression() -> [OrderStatus; 3] {
		[
			OrderStatus::Pendiente,
			OrderStatus::EnProceso,
			OrderStatus::Entregado,
		]
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
