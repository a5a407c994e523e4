//! Status state machine.
//!
//! Defines which order-status transitions are legal: the forward
//! progression `PENDIENTE -> EN_PROCESO -> ENTREGADO`, with `CANCELADO`
//! reachable from any non-terminal state. The machine is advisory for
//! the client: it decides which transitions a UI may offer, while the
//! backend remains authoritative about acceptance.

use once_cell::sync::Lazy;
use pedidos_types::OrderStatus;
use std::collections::{HashMap, HashSet};

// Static transition table - each state maps to allowed next states
static TRANSITIONS: Lazy<HashMap<OrderStatus, HashSet<OrderStatus>>> = Lazy::new(|| {
	let mut m = HashMap::new();
	m.insert(
		OrderStatus::Pendiente,
		HashSet::from([OrderStatus::EnProceso, OrderStatus::Cancelado]),
	);
	m.insert(
		OrderStatus::EnProceso,
		HashSet::from([OrderStatus::Entregado, OrderStatus::Cancelado]),
	);
	m.insert(OrderStatus::Entregado, HashSet::new()); // terminal
	m.insert(OrderStatus::Cancelado, HashSet::new()); // terminal
	m
});

/// Whether moving from `from` to `to` is a legal transition.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
	TRANSITIONS
		.get(&from)
		.is_some_and(|allowed| allowed.contains(&to))
}

/// Whether the status admits no further transitions.
pub fn is_terminal(status: OrderStatus) -> bool {
	TRANSITIONS
		.get(&status)
		.is_none_or(|allowed| allowed.is_empty())
}

/// The transitions a UI may offer from the given status, forward step
/// first, then cancellation. Skipping straight to `Entregado` from
/// `Pendiente` is never offered.
pub fn offered_transitions(from: OrderStatus) -> Vec<OrderStatus> {
	let mut offered: Vec<OrderStatus> = OrderStatus::progression()
		.into_iter()
		.filter(|next| can_transition(from, *next))
		.collect();
	if can_transition(from, OrderStatus::Cancelado) {
		offered.push(OrderStatus::Cancelado);
	}
	offered
}
