//! Operator roles.
//!
//! Roles drive the visibility scope of the order set: administrators
//! and managers see every order, sellers only their own.

use serde::{Deserialize, Serialize};

/// Role of the authenticated operator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
	Admin,
	Manager,
	Vendedor,
}

impl Role {
	/// Whether this role may see the global order set.
	pub fn is_elevated(&self) -> bool {
		matches!(self, Role::Admin | Role::Manager)
	}
}
