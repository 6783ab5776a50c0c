/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The migrator contract. One action, `inject`, addressed like the row-store writes a
//! migration performs; the stub only reports what it was asked to write.

use crate::database::RowAddress;
use crate::{action, contract_methods, internal};

/// The contract struct. It declares no storage fields: the contract keeps no state between
/// calls.
pub struct Migrator;

#[contract_methods]
impl Migrator {
    /// Receives the address of one database row and emits it as a debug message. No
    /// constraint is checked on any of the four identifiers, and nothing is written to the
    /// row store.
    #[action]
    pub fn inject(scope: u64, table: u64, payer: u64, id: u64) {
        let address = RowAddress { scope, table, payer, id };
        internal::log(&address.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock_host, ActionInput, ActionInputBuilder};

    fn inject_arguments(scope: u64, table: u64, payer: u64, id: u64) -> Vec<u8> {
        let mut builder = ActionInputBuilder::new();
        builder.add(scope).add(table).add(payer).add(id);
        builder.to_call_arguments()
    }

    #[test]
    fn inject_logs_one_line_and_touches_nothing() {
        mock_host::reset();
        mock_host::set_incoming_call("inject", inject_arguments(1, 2, 3, 4));

        entrypoint();

        assert_eq!(
            mock_host::logged_messages(),
            vec!["scope: 1, table: 2, payer: 3, id: 4".to_string()]
        );
        assert!(mock_host::stored_rows().is_empty());
        assert_eq!(mock_host::returned_value(), None);
    }

    #[test]
    fn inject_accepts_the_full_identifier_range() {
        mock_host::reset();
        mock_host::set_incoming_call("inject", inject_arguments(u64::MAX, 0, u64::MAX, 0));

        entrypoint();

        assert_eq!(
            mock_host::logged_messages(),
            vec![format!("scope: {}, table: 0, payer: {}, id: 0", u64::MAX, u64::MAX)]
        );
        assert!(mock_host::stored_rows().is_empty());
    }

    #[test]
    fn inject_is_callable_without_dispatch() {
        mock_host::reset();

        Migrator::inject(5, 6, 7, 8);

        assert_eq!(
            mock_host::logged_messages(),
            vec!["scope: 5, table: 6, payer: 7, id: 8".to_string()]
        );
        assert!(mock_host::stored_rows().is_empty());
    }

    #[test]
    #[should_panic(expected = "no action named")]
    fn unknown_action_aborts() {
        dispatch(ActionInput {
            method_name: "transfer".to_string(),
            arguments: ActionInputBuilder::new().to_call_arguments(),
        });
    }

    #[test]
    #[should_panic(expected = "argument 2 is missing")]
    fn short_argument_list_aborts() {
        let mut builder = ActionInputBuilder::new();
        builder.add(1_u64).add(2_u64);

        dispatch(ActionInput {
            method_name: "inject".to_string(),
            arguments: builder.to_call_arguments(),
        });
    }

    #[test]
    #[should_panic(expected = "not a well-formed argument list")]
    fn opaque_argument_bytes_abort() {
        dispatch(ActionInput {
            method_name: "inject".to_string(),
            arguments: vec![0xFF],
        });
    }
}
