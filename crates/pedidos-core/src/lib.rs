//! Order composition and lifecycle engine.
//!
//! This crate implements the client-held model of an order: building a
//! cart from reference data, validating the draft against the live
//! cache, assembling the creation payload, and tracking submitted
//! orders through their status lifecycle. All remote interaction goes
//! through the collaborator traits of `pedidos-client`; nothing here
//! talks to the network directly.
//!
//! Data flows one direction during composition:
//! reference cache -> cart -> validator -> assembler -> submission.
//! After creation the [`store::OrderStore`] is the single source of
//! truth for subsequent transitions.

/// Draft-to-payload assembly.
pub mod assemble;
/// Cart builder and the order draft it belongs to.
pub mod cart;
/// Per-session reference data cache.
pub mod reference;
/// Status state machine legality rules.
pub mod status;
/// Session-scoped order lifecycle store.
pub mod store;
/// Pre-submission validation gate.
pub mod validate;

pub use assemble::build_payload;
pub use cart::{Cart, CartError, CartLine, OrderDraft};
pub use reference::ReferenceData;
pub use status::{can_transition, is_terminal, offered_transitions};
pub use store::{OrderStore, StoreError};
pub use validate::{validate, ValidationError};
