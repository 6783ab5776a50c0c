/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines the addressing scheme of the host's row store and safe wrappers over its two
//! intrinsics. A row lives under an account `scope`, inside a named `table`, keyed by a
//! primary `id`; storing a row bills the `payer` account. The wrappers are part of the
//! contract's binding surface: [crate::contract::Migrator::inject] receives a full
//! [RowAddress] but, as a stub, only reports it — nothing in this crate writes through
//! [store] on-chain.

use std::fmt;

use crate::imports;

/// The four addressing components of one database row, in the order the host's intrinsics
/// (and the `inject` action) take them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAddress {
    /// Account namespace the row lives under.
    pub scope: u64,
    /// Table identifier within the scope.
    pub table: u64,
    /// Account billed for the row's resources.
    pub payer: u64,
    /// Row primary key.
    pub id: u64,
}

impl fmt::Display for RowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scope: {}, table: {}, payer: {}, id: {}",
            self.scope, self.table, self.payer, self.id
        )
    }
}

/// Looks a row up by key under the contract identified by `code`. Returns the row's index,
/// or None if no row is bound to `(code, scope, table, id)`.
pub fn find(code: u64, scope: u64, table: u64, id: u64) -> Option<i32> {
    match unsafe { imports::db_find(code, scope, table, id) } {
        index if index < 0 => None,
        index => Some(index),
    }
}

/// Binds `data` to `address` in this contract's row store, billing `address.payer`.
/// Returns the stored row's index.
pub fn store(address: &RowAddress, data: &[u8]) -> i32 {
    let data_ptr = data.as_ptr();
    unsafe {
        imports::db_store(
            address.scope,
            address.table,
            address.payer,
            address.id,
            data_ptr,
            data.len() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_host;

    #[test]
    fn row_address_renders_its_components_in_order() {
        let address = RowAddress { scope: 1, table: 2, payer: 3, id: 4 };
        assert_eq!(address.to_string(), "scope: 1, table: 2, payer: 3, id: 4");
    }

    #[test]
    fn find_misses_on_an_empty_row_store() {
        mock_host::reset();
        assert_eq!(find(11, 1, 2, 4), None);
    }

    #[test]
    fn stored_rows_are_found_by_key() {
        mock_host::reset();
        let address = RowAddress { scope: 1, table: 2, payer: 3, id: 4 };

        let index = store(&address, b"snapshot-row");
        assert_eq!(find(11, 1, 2, 4), Some(index));

        let rows = mock_host::stored_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].data, b"snapshot-row");
    }
}
