//! # Wares Architecture
//!
//! Wares is a small item catalog service: CRUD over items (name,
//! description, price) backed by a single flat JSON file, with
//! filter/sort/paginate list semantics exposed over HTTP.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Extracts params, maps results to status codes            │
//! │  - The ONLY place that knows about requests and responses   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Facade (service.rs)                                │
//! │  - Validates drafts (non-blank name)                        │
//! │  - Composes snapshot → filter → sort → paginate for reads   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Engine (query.rs)                                    │
//! │  - Pure functions over snapshots, no locks, no I/O          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ItemStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Critical Section Per Call
//!
//! The store owns the collection and its file mirror behind a single
//! mutex. A mutation and its flush form one critical section; a read
//! takes the lock only long enough to clone a snapshot. All
//! filter/sort/paginate work happens on snapshots, lock-free.
//!
//! ## Durability Model
//!
//! Every successful mutation rewrites the whole file via a temp file
//! and an atomic rename before the call returns. If the flush fails the
//! caller sees an error while the in-memory change stays applied; that
//! divergence window is the one acknowledged consistency gap.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Item`, `ItemDraft`)
//! - [`store`]: Storage abstraction and implementations
//! - [`query`]: Pure filter/sort/paginate/count functions
//! - [`service`]: The facade all boundaries call into
//! - [`server`]: Axum router, handlers, and server lifecycle
//! - [`error`]: Error types

pub mod error;
pub mod model;
pub mod query;
pub mod server;
pub mod service;
pub mod store;
