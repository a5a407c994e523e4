//! Cart builder and order draft.
//!
//! Accumulates the line items an operator picks while composing an
//! order. The cart enforces the per-line invariants it can decide on
//! its own (positive quantities, one line per product); cross-entity
//! checks against the reference cache belong to the validator. Price
//! and stock captured at add-time are snapshots for display only.

use pedidos_types::{round_currency, Product};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
	/// A line was added with a zero quantity.
	#[error("La cantidad debe ser mayor que cero")]
	InvalidQuantity,
}

/// One product-and-quantity entry within a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
	/// Product identity.
	pub producto_id: i64,
	/// Product name, captured for display.
	pub nombre: String,
	/// Unit price snapshot taken when the line was created.
	pub precio: Decimal,
	/// Chosen quantity. Always positive; dropping to zero removes the
	/// line.
	pub cantidad: u32,
	/// Stock snapshot taken when the line was created, used only for
	/// UI hinting. The validator re-reads the cache.
	pub stock: u32,
}

/// The set of cart lines for the order being composed.
#[derive(Debug, Clone, Default)]
pub struct Cart {
	lines: Vec<CartLine>,
}

impl Cart {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `cantidad` units of `product` to the cart.
	///
	/// If a line for the product already exists its quantity is
	/// incremented instead of creating a duplicate line. No stock cap
	/// is applied here; the validator enforces the authoritative cap
	/// against current stock.
	pub fn add_line(&mut self, product: &Product, cantidad: u32) -> Result<(), CartError> {
		if cantidad == 0 {
			return Err(CartError::InvalidQuantity);
		}

		if let Some(line) = self.lines.iter_mut().find(|l| l.producto_id == product.id) {
			line.cantidad += cantidad;
		} else {
			self.lines.push(CartLine {
				producto_id: product.id,
				nombre: product.nombre.clone(),
				precio: product.precio,
				cantidad,
				stock: product.stock,
			});
		}
		Ok(())
	}

	/// Sets the quantity of an existing line.
	///
	/// Zero removes the line; otherwise the value is clamped to the
	/// stock known at add-time. Unknown product identities are a no-op.
	pub fn set_quantity(&mut self, producto_id: i64, cantidad: u32) {
		if cantidad == 0 {
			self.remove_line(producto_id);
			return;
		}
		if let Some(line) = self.lines.iter_mut().find(|l| l.producto_id == producto_id) {
			line.cantidad = cantidad.min(line.stock);
		}
	}

	/// Removes the line for `producto_id` if present.
	pub fn remove_line(&mut self, producto_id: i64) {
		self.lines.retain(|l| l.producto_id != producto_id);
	}

	/// Line subtotal, rounded to two-decimal currency precision.
	pub fn subtotal(line: &CartLine) -> Decimal {
		round_currency(line.precio * Decimal::from(line.cantidad))
	}

	/// Cart total, rounded to two-decimal currency precision. Exactly
	/// zero for an empty cart.
	pub fn total(&self) -> Decimal {
		round_currency(self.lines.iter().map(Cart::subtotal).sum())
	}

	pub fn lines(&self) -> &[CartLine] {
		&self.lines
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

/// An order being composed client-side, not yet submitted.
///
/// Exists only during composition; once submission is accepted the
/// draft is discarded in favor of the persisted order.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
	/// Selected customer. Required before submission.
	pub cliente_id: Option<i64>,
	/// Selected seller, optional.
	pub vendedor_id: Option<i64>,
	/// Free-text notes.
	pub notas: String,
	/// The current set of cart lines.
	pub cart: Cart,
}
