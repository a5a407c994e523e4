//! Session-scoped order lifecycle store.
//!
//! The authoritative in-memory collection of orders for the current
//! authenticated session. Every state change is mediated by the
//! [`OrderApi`] collaborator: local state is mutated only after the
//! backend acknowledges success, so a failed request never leaves a
//! speculative local change behind. Serializing transitions per order
//! identity is the caller's policy; the store has no conflict
//! resolution for overlapping transitions on one id.

use crate::status;
use pedidos_client::{ClientError, OrderApi, OrderScope};
use pedidos_types::{Order, OrderPayload, OrderStatus, Role};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The collaborator rejected or never received the request.
	#[error(transparent)]
	Client(#[from] ClientError),
	/// The requested transition is forbidden by the state machine for
	/// the locally known status. Non-actionable: the operator must
	/// refresh or pick an offered transition.
	#[error("Transición no permitida: {from} → {to}")]
	InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// The working set of orders visible to the current session.
///
/// Created at login, cleared at logout, and injected into consumers
/// rather than accessed as an ambient singleton.
pub struct OrderStore {
	api: Arc<dyn OrderApi>,
	orders: RwLock<Vec<Order>>,
	current: RwLock<Option<Order>>,
	last_error: RwLock<Option<String>>,
}

impl OrderStore {
	/// Creates an empty store backed by the given collaborator.
	pub fn new(api: Arc<dyn OrderApi>) -> Self {
		Self {
			api,
			orders: RwLock::new(Vec::new()),
			current: RwLock::new(None),
			last_error: RwLock::new(None),
		}
	}

	/// Role-scoped refresh of the order set.
	///
	/// Elevated roles load the global set; anyone else loads only the
	/// orders attributed to them as seller. Best-effort: a failure
	/// leaves the set empty and records the message instead of
	/// propagating.
	pub async fn load(&self, role: Role, user_id: i64) {
		let scope = if role.is_elevated() {
			OrderScope::All
		} else {
			OrderScope::Seller(user_id)
		};

		match self.api.fetch_orders(scope).await {
			Ok(list) => {
				info!(count = list.len(), ?scope, "orders loaded");
				*self.orders.write().await = list;
				*self.last_error.write().await = None;
			}
			Err(e) => {
				warn!(error = %e, ?scope, "order load failed, keeping empty set");
				*self.orders.write().await = Vec::new();
				*self.last_error.write().await = Some(e.to_string());
			}
		}
	}

	/// Submits a creation payload.
	///
	/// On success the returned order is prepended to the set and made
	/// current. On failure nothing changes locally.
	pub async fn create(&self, payload: &OrderPayload) -> Result<Order, StoreError> {
		let order = self.api.submit_order(payload).await?;
		info!(order_id = order.id, "order created");

		self.orders.write().await.insert(0, order.clone());
		*self.current.write().await = Some(order.clone());
		*self.last_error.write().await = None;
		Ok(order)
	}

	/// Requests a status transition for one order.
	///
	/// Transitions the machine forbids for the locally known status are
	/// rejected before any request is issued. Otherwise the change goes
	/// through the collaborator and the local copy is replaced only
	/// with the server-confirmed order.
	pub async fn transition_status(
		&self,
		order_id: i64,
		new_status: OrderStatus,
	) -> Result<Order, StoreError> {
		let local_status = {
			let orders = self.orders.read().await;
			orders.iter().find(|o| o.id == order_id).map(|o| o.estado)
		};
		if let Some(from) = local_status {
			if !status::can_transition(from, new_status) {
				return Err(StoreError::InvalidTransition {
					from,
					to: new_status,
				});
			}
		}

		let updated = self.api.update_order_status(order_id, new_status).await?;
		info!(order_id, status = %updated.estado, "order status updated");
		self.replace_local(updated.clone()).await;
		Ok(updated)
	}

	/// Cancels an order: a transition to the terminal `CANCELADO`
	/// state. The reason is recorded in the log only; the backend takes
	/// no reason parameter.
	pub async fn cancel(&self, order_id: i64, reason: &str) -> Result<Order, StoreError> {
		info!(order_id, reason, "cancelling order");
		self.transition_status(order_id, OrderStatus::Cancelado)
			.await
	}

	/// Fetches a single order afresh and makes it current.
	///
	/// Does not assume the order is already present locally.
	pub async fn get_by_id(&self, order_id: i64) -> Result<Order, StoreError> {
		let order = self.api.fetch_order(order_id).await?;
		*self.current.write().await = Some(order.clone());
		Ok(order)
	}

	/// Replaces the matching order in the set and in the current slot.
	async fn replace_local(&self, updated: Order) {
		{
			let mut orders = self.orders.write().await;
			if let Some(slot) = orders.iter_mut().find(|o| o.id == updated.id) {
				*slot = updated.clone();
			}
		}
		let mut current = self.current.write().await;
		if current.as_ref().is_some_and(|c| c.id == updated.id) {
			*current = Some(updated);
		}
	}

	/// Snapshot of the current order set.
	pub async fn orders(&self) -> Vec<Order> {
		self.orders.read().await.clone()
	}

	/// The order most recently created or fetched, if any.
	pub async fn current_order(&self) -> Option<Order> {
		self.current.read().await.clone()
	}

	/// The message recorded by the last failed load, if any.
	pub async fn last_error(&self) -> Option<String> {
		self.last_error.read().await.clone()
	}

	/// Clears the current-order slot.
	pub async fn clear_current(&self) {
		*self.current.write().await = None;
	}

	/// Logout teardown: drops every order, the current slot, and any
	/// recorded error.
	pub async fn clear(&self) {
		*self.orders.write().await = Vec::new();
		*self.current.write().await = None;
		*self.last_error.write().await = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use pedidos_types::PayloadLine;
	use rust_decimal_macros::dec;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Mutex;

	fn order(id: i64, estado: OrderStatus) -> Order {
		Order {
			id,
			cliente_id: Some(1),
			vendedor_id: None,
			fecha_pedido: None,
			notas: String::new(),
			detalles: vec![],
			total: dec!(100.00),
			estado,
		}
	}

	fn payload() -> OrderPayload {
		OrderPayload {
			cliente_id: 1,
			vendedor_id: None,
			notas: "Pedido urgente".to_string(),
			detalles: vec![PayloadLine {
				producto_id: 3,
				cantidad: 2,
				precio_unitario: dec!(1299.99),
			}],
		}
	}

	/// Scripted collaborator: serves a fixed order set and can be told
	/// to fail each operation.
	struct MockApi {
		orders: Vec<Order>,
		fail: bool,
		fail_update: bool,
		update_calls: AtomicUsize,
		seen_scope: Mutex<Option<OrderScope>>,
	}

	impl MockApi {
		fn new(orders: Vec<Order>) -> Self {
			Self {
				orders,
				fail: false,
				fail_update: false,
				update_calls: AtomicUsize::new(0),
				seen_scope: Mutex::new(None),
			}
		}

		fn failing() -> Self {
			Self {
				fail: true,
				..Self::new(vec![])
			}
		}

		fn rejection() -> ClientError {
			ClientError::Http {
				status: 400,
				message: "Datos inválidos".to_string(),
			}
		}
	}

	#[async_trait]
	impl OrderApi for MockApi {
		async fn submit_order(&self, payload: &OrderPayload) -> Result<Order, ClientError> {
			if self.fail {
				return Err(Self::rejection());
			}
			let mut created = order(100, OrderStatus::Pendiente);
			created.cliente_id = Some(payload.cliente_id);
			Ok(created)
		}

		async fn update_order_status(
			&self,
			order_id: i64,
			status: OrderStatus,
		) -> Result<Order, ClientError> {
			self.update_calls.fetch_add(1, Ordering::SeqCst);
			if self.fail || self.fail_update {
				return Err(Self::rejection());
			}
			let mut updated = self
				.orders
				.iter()
				.find(|o| o.id == order_id)
				.cloned()
				.unwrap_or_else(|| order(order_id, OrderStatus::Pendiente));
			updated.estado = status;
			Ok(updated)
		}

		async fn fetch_order(&self, order_id: i64) -> Result<Order, ClientError> {
			if self.fail {
				return Err(Self::rejection());
			}
			Ok(order(order_id, OrderStatus::EnProceso))
		}

		async fn fetch_orders(&self, scope: OrderScope) -> Result<Vec<Order>, ClientError> {
			*self.seen_scope.lock().unwrap() = Some(scope);
			if self.fail {
				return Err(Self::rejection());
			}
			Ok(self.orders.clone())
		}
	}

	#[tokio::test]
	async fn create_prepends_and_sets_current() {
		let store = OrderStore::new(Arc::new(MockApi::new(vec![order(
			1,
			OrderStatus::Pendiente,
		)])));
		store.load(Role::Admin, 1).await;

		let created = store.create(&payload()).await.unwrap();
		assert_eq!(created.id, 100);

		let orders = store.orders().await;
		assert_eq!(orders.len(), 2);
		assert_eq!(orders[0].id, 100);
		assert_eq!(store.current_order().await.unwrap().id, 100);
	}

	#[tokio::test]
	async fn failed_create_changes_nothing() {
		let store = OrderStore::new(Arc::new(MockApi::failing()));
		let result = store.create(&payload()).await;
		assert!(matches!(
			result,
			Err(StoreError::Client(ClientError::Http { status: 400, .. }))
		));
		assert!(store.orders().await.is_empty());
		assert!(store.current_order().await.is_none());
	}

	#[tokio::test]
	async fn transition_replaces_local_copy_on_success() {
		let api = Arc::new(MockApi::new(vec![order(7, OrderStatus::Pendiente)]));
		let store = OrderStore::new(api);
		store.load(Role::Admin, 1).await;

		let updated = store
			.transition_status(7, OrderStatus::EnProceso)
			.await
			.unwrap();
		assert_eq!(updated.estado, OrderStatus::EnProceso);
		assert_eq!(store.orders().await[0].estado, OrderStatus::EnProceso);
	}

	#[tokio::test]
	async fn failed_transition_leaves_local_order_untouched() {
		let mut api = MockApi::new(vec![order(7, OrderStatus::Pendiente)]);
		api.fail_update = true;
		let store = OrderStore::new(Arc::new(api));
		store.load(Role::Admin, 1).await;
		let before = store.orders().await[0].clone();

		let result = store.transition_status(7, OrderStatus::EnProceso).await;
		assert!(matches!(result, Err(StoreError::Client(_))));
		assert_eq!(store.orders().await[0], before);
		assert_eq!(store.orders().await[0].estado, OrderStatus::Pendiente);
	}

	#[tokio::test]
	async fn locally_illegal_transition_never_reaches_the_api() {
		let api = Arc::new(MockApi::new(vec![order(7, OrderStatus::Entregado)]));
		let store = OrderStore::new(Arc::clone(&api) as Arc<dyn OrderApi>);
		store.load(Role::Admin, 1).await;

		let result = store.transition_status(7, OrderStatus::EnProceso).await;
		assert!(matches!(
			result,
			Err(StoreError::InvalidTransition {
				from: OrderStatus::Entregado,
				to: OrderStatus::EnProceso,
			})
		));
		assert_eq!(api.update_calls.load(Ordering::SeqCst), 0);
		assert_eq!(store.orders().await[0].estado, OrderStatus::Entregado);
	}

	#[tokio::test]
	async fn cancel_is_a_transition_to_cancelado() {
		let store = OrderStore::new(Arc::new(MockApi::new(vec![order(
			7,
			OrderStatus::Pendiente,
		)])));
		store.load(Role::Admin, 1).await;

		let cancelled = store.cancel(7, "Cancelado por el administrador").await.unwrap();
		assert_eq!(cancelled.estado, OrderStatus::Cancelado);
		assert_eq!(store.orders().await[0].estado, OrderStatus::Cancelado);
	}

	#[tokio::test]
	async fn load_scopes_by_role() {
		let api = Arc::new(MockApi::new(vec![]));
		let store = OrderStore::new(Arc::clone(&api) as Arc<dyn OrderApi>);

		store.load(Role::Manager, 42).await;
		assert_eq!(*api.seen_scope.lock().unwrap(), Some(OrderScope::All));

		store.load(Role::Vendedor, 42).await;
		assert_eq!(
			*api.seen_scope.lock().unwrap(),
			Some(OrderScope::Seller(42))
		);
	}

	#[tokio::test]
	async fn failed_load_degrades_to_empty_set() {
		let api = Arc::new(MockApi::new(vec![order(1, OrderStatus::Pendiente)]));
		let store = OrderStore::new(Arc::clone(&api) as Arc<dyn OrderApi>);
		store.load(Role::Admin, 1).await;
		assert_eq!(store.orders().await.len(), 1);

		let failing = OrderStore::new(Arc::new(MockApi::failing()));
		failing.load(Role::Admin, 1).await;
		assert!(failing.orders().await.is_empty());
		assert_eq!(
			failing.last_error().await,
			Some("Datos inválidos".to_string())
		);
	}

	#[tokio::test]
	async fn get_by_id_fetches_fresh_and_sets_current() {
		let store = OrderStore::new(Arc::new(MockApi::new(vec![])));
		let fetched = store.get_by_id(55).await.unwrap();
		assert_eq!(fetched.id, 55);
		assert_eq!(store.current_order().await.unwrap().id, 55);
	}

	#[tokio::test]
	async fn clear_tears_down_the_session_state() {
		let store = OrderStore::new(Arc::new(MockApi::new(vec![order(
			1,
			OrderStatus::Pendiente,
		)])));
		store.load(Role::Admin, 1).await;
		store.get_by_id(1).await.unwrap();

		store.clear().await;
		assert!(store.orders().await.is_empty());
		assert!(store.current_order().await.is_none());
		assert!(store.last_error().await.is_none());
	}
}
