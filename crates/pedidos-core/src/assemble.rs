//! Draft-to-payload assembly.
//!
//! Converts a validated draft into the canonical creation payload. The
//! assembler performs no validation of its own; it assumes the gate in
//! [`crate::validate`] has already passed, which makes it deterministic
//! and side-effect free.

use crate::cart::OrderDraft;
use pedidos_types::{round_currency, OrderPayload, PayloadLine};

/// Builds the order-creation payload from a validated draft.
///
/// Unit prices are rounded to exactly two decimal places; a missing
/// seller is carried as an explicit `null` on the wire.
pub fn build_payload(draft: &OrderDraft) -> OrderPayload {
	OrderPayload {
		cliente_id: draft.cliente_id.unwrap_or_default(),
		vendedor_id: draft.vendedor_id,
		notas: draft.notas.clone(),
		detalles: draft
			.cart
			.lines()
			.iter()
			.map(|line| PayloadLine {
				producto_id: line.producto_id,
				cantidad: line.cantidad,
				precio_unitario: round_currency(line.precio),
			})
			.collect(),
	}
}
