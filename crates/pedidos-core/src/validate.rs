//! Pre-submission validation gate.
//!
//! Cross-checks the draft against the live reference cache and the
//! numeric-integrity rules, rejecting on the first violated rule in a
//! fixed priority order. Validation is pure over its inputs: it makes
//! no network calls and mutates nothing. Stock checks deliberately
//! re-read the cache rather than trusting add-time snapshots.

use crate::cart::OrderDraft;
use crate::reference::ReferenceData;
use rust_decimal::Decimal;
use thiserror::Error;

/// Composition rules a draft can violate, in the order they are
/// checked. Every variant carries the message shown to the operator;
/// all are recoverable by correcting the draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Debe seleccionar un cliente")]
	MissingCustomer,
	#[error("Debe agregar al menos un producto")]
	EmptyCart,
	#[error("Hay productos con datos inválidos")]
	MalformedLine,
	#[error("El cliente seleccionado no es válido")]
	UnknownCustomer,
	#[error("El vendedor seleccionado no es válido")]
	UnknownSeller,
	#[error("El producto '{0}' no está disponible")]
	UnknownProduct(String),
	#[error("Stock insuficiente para '{nombre}': disponible {disponible}, solicitado {solicitado}")]
	InsufficientStock {
		nombre: String,
		disponible: u32,
		solicitado: u32,
	},
	#[error("Error calculando el total del pedido")]
	InvalidTotal,
}

/// Validates a draft against the reference cache.
///
/// Returns the first violated rule. Rule priority, in order: customer
/// selected, non-empty cart, well-formed lines, known customer, known
/// seller (when assigned), known products, sufficient current stock,
/// positive total.
pub fn validate(draft: &OrderDraft, reference: &ReferenceData) -> Result<(), ValidationError> {
	let cliente_id = draft.cliente_id.ok_or(ValidationError::MissingCustomer)?;

	if draft.cart.is_empty() {
		return Err(ValidationError::EmptyCart);
	}

	for line in draft.cart.lines() {
		if line.cantidad == 0 || line.precio <= Decimal::ZERO || line.producto_id <= 0 {
			return Err(ValidationError::MalformedLine);
		}
	}

	if reference.customer(cliente_id).is_none() {
		return Err(ValidationError::UnknownCustomer);
	}

	if let Some(vendedor_id) = draft.vendedor_id {
		if reference.seller(vendedor_id).is_none() {
			return Err(ValidationError::UnknownSeller);
		}
	}

	for line in draft.cart.lines() {
		if reference.product(line.producto_id).is_none() {
			return Err(ValidationError::UnknownProduct(line.nombre.clone()));
		}
	}

	for line in draft.cart.lines() {
		// Authoritative stock is the cache, not the add-time snapshot
		if let Some(product) = reference.product(line.producto_id) {
			if line.cantidad > product.stock {
				return Err(ValidationError::InsufficientStock {
					nombre: product.nombre.clone(),
					disponible: product.stock,
					solicitado: line.cantidad,
				});
			}
		}
	}

	if draft.cart.total() <= Decimal::ZERO {
		return Err(ValidationError::InvalidTotal);
	}

	Ok(())
}
