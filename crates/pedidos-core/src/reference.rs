//! Per-session reference data cache.
//!
//! A read-only snapshot of customers, sellers, and sellable products,
//! fetched once per form-open and discarded with the form. The three
//! lookups run in parallel and tolerate partial failure: a failed
//! lookup degrades to an empty list so the others still populate.
//!
//! Add-time snapshots in the cart are display-only; every authoritative
//! check re-reads this cache, so staleness is bounded by the form-open
//! refresh policy.

use pedidos_client::DirectoryApi;
use pedidos_types::{Customer, Product, Seller};
use tracing::{debug, warn};

/// Snapshot of the directory data an operator composes orders against.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
	customers: Vec<Customer>,
	sellers: Vec<Seller>,
	products: Vec<Product>,
}

impl ReferenceData {
	/// Builds a fresh snapshot from the directory collaborator.
	///
	/// Never fails: each lookup that errors is logged and yields an
	/// empty list for that entity only.
	pub async fn load(directory: &dyn DirectoryApi) -> Self {
		let (customers, sellers, products) = tokio::join!(
			directory.list_customers(),
			directory.list_sellers(),
			directory.list_products()
		);

		let customers = customers.unwrap_or_else(|e| {
			warn!(error = %e, "customer lookup failed, continuing with empty list");
			Vec::new()
		});
		let sellers = sellers.unwrap_or_else(|e| {
			warn!(error = %e, "seller lookup failed, continuing with empty list");
			Vec::new()
		});
		let products = products.unwrap_or_else(|e| {
			warn!(error = %e, "product lookup failed, continuing with empty list");
			Vec::new()
		});

		debug!(
			customers = customers.len(),
			sellers = sellers.len(),
			products = products.len(),
			"reference data loaded"
		);

		Self {
			customers,
			sellers,
			products,
		}
	}

	/// Snapshot constructor for contexts that already hold the lists.
	pub fn from_parts(
		customers: Vec<Customer>,
		sellers: Vec<Seller>,
		products: Vec<Product>,
	) -> Self {
		Self {
			customers,
			sellers,
			products,
		}
	}

	/// Looks up a customer by identity.
	pub fn customer(&self, id: i64) -> Option<&Customer> {
		self.customers.iter().find(|c| c.id == id)
	}

	/// Looks up a seller by identity.
	pub fn seller(&self, id: i64) -> Option<&Seller> {
		self.sellers.iter().find(|s| s.id == id)
	}

	/// Looks up a product by identity; stock read here is authoritative.
	pub fn product(&self, id: i64) -> Option<&Product> {
		self.products.iter().find(|p| p.id == id)
	}

	/// All customers in the snapshot, for selector population.
	pub fn customers(&self) -> &[Customer] {
		&self.customers
	}

	/// All sellers in the snapshot.
	pub fn sellers(&self) -> &[Seller] {
		&self.sellers
	}

	/// All sellable products in the snapshot.
	pub fn products(&self) -> &[Product] {
		&self.products
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use pedidos_client::ClientError;
	use rust_decimal_macros::dec;

	struct PartialDirectory;

	#[async_trait]
	impl DirectoryApi for PartialDirectory {
		async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
			Ok(vec![Customer {
				id: 1,
				nombre: "Acme SA".to_string(),
				email: "ventas@acme.test".to_string(),
				telefono: None,
			}])
		}

		async fn list_sellers(&self) -> Result<Vec<Seller>, ClientError> {
			Err(ClientError::Network("connection refused".to_string()))
		}

		async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
			Ok(vec![Product {
				id: 9,
				nombre: "Monitor".to_string(),
				precio: dec!(1299.99),
				stock: 4,
			}])
		}
	}

	#[tokio::test]
	async fn partial_failure_leaves_other_lists_populated() {
		let reference = ReferenceData::load(&PartialDirectory).await;
		assert_eq!(reference.customers().len(), 1);
		assert!(reference.sellers().is_empty());
		assert_eq!(reference.products().len(), 1);
	}

	#[tokio::test]
	async fn lookups_resolve_by_identity() {
		let reference = ReferenceData::load(&PartialDirectory).await;
		assert!(reference.customer(1).is_some());
		assert!(reference.customer(2).is_none());
		assert_eq!(reference.product(9).unwrap().stock, 4);
		assert!(reference.seller(1).is_none());
	}
}
