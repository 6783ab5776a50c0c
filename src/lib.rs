/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

/// Defines the migrator contract itself: the `Migrator` struct and the `inject` action that
/// transactions enter through the generated `entrypoint`.
pub mod contract;

/// Defines the `RowAddress` addressing scheme of the host's row store, and safe wrappers
/// over the two database intrinsics (`db_find`, `db_store`). The wrappers are part of the
/// contract's binding surface; no action currently writes through them.
pub mod database;

/// Defines the data structures that carry a call into the contract: `ActionInput` selects
/// the action a transaction should enter and provides its borsh-serialized arguments,
/// `ActionOutput` wraps an action's return value.
pub mod method;
pub use method::{ActionInput, ActionInputBuilder, ActionOutput};

/// Defines functions for getting the dispatch payload of the Transaction that triggered
/// this call, i.e. the target method name and the serialized argument list.
pub mod transaction;

/// Defines functions that interact with this transaction's context: emitting a debug
/// message to the host's log, and placing a return value in the receipt.
pub mod internal;
pub use internal::{log, return_value};

/// Defines the errors a call payload can fail with before it reaches an action body, and
/// `abort`, which turns one into a host-level trap.
pub mod error;
pub use error::{abort, ActionError};

/// Defines the `alloc` function exported from the contract WASM module so that the host VM
/// can allocate segments in WASM linear memory.
mod exports;

/// Defines the signatures of the externally-defined functions that the contract WASM module
/// expects to be linked to the WASM runtime during module instantiation. The definitions
/// (function bodies) of these functions live in the host node implementation.
mod imports;

/// A recording stand-in for the host, compiled on every target the WASM runtime is not.
/// Unit tests prime it with an incoming call and observe what the contract did to it.
#[cfg(not(target_arch = "wasm32"))]
pub mod mock_host;

pub use migrator_macros::{action, contract_methods};
