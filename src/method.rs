/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines the abstract level of inputs and outputs of a contract action. The
//! `#[contract_methods]` macro unpacks an [ActionInput] in expanded code: the structure
//! selects the action a Transaction should enter, and provides the arguments for the
//! function call. [ActionOutput] wraps the return value an action places in the receipt.
//!
//! Developers typically do not need to care about the contents of this module; the macro
//! handles the creation and consumption of ActionInput in expanded code.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::ActionError;
use crate::transaction;

/// Input of a contract action call: the action name and its borsh-serialized arguments.
pub struct ActionInput {
    pub method_name: String,
    pub arguments: Vec<u8>,
}

impl ActionInput {
    /// Convert the dispatch payload of the invoking transaction.
    pub fn from_transaction() -> Self {
        Self {
            method_name: transaction::method(),
            arguments: transaction::arguments(),
        }
    }

    /// Get the action name as &str.
    pub fn method_name(&self) -> &str {
        self.method_name.as_str()
    }

    /// Converts `arguments` to `Vec<Vec<u8>>` so that each element can be parsed into a
    /// specific data type of the action's signature.
    pub fn get_multiple_arguments(&self) -> Result<Vec<Vec<u8>>, ActionError> {
        <Vec<Vec<u8>>>::try_from_slice(self.arguments.as_slice())
            .map_err(ActionError::MalformedArguments)
    }

    /// Parser function to deserialize the indexed argument into the defined data type.
    pub fn parse_multiple_arguments<T: BorshDeserialize>(
        args: &[Vec<u8>],
        idx: usize,
    ) -> Result<T, ActionError> {
        let bytes = args.get(idx).ok_or(ActionError::MissingArgument {
            index: idx,
            supplied: args.len(),
        })?;
        T::try_from_slice(bytes).map_err(|source| ActionError::ArgumentDecoding { index: idx, source })
    }
}

/// Builder to construct the argument list of a call so that it can be passed to an action.
///
/// # Basic example
/// ```no_run
/// let mut args_builder = migrator::ActionInputBuilder::new();
/// args_builder
/// .add(0_u64)
/// .add(1_u64);
///
/// // construct Vec<u8> data to pass as call arguments
/// let args: Vec<u8> = args_builder.to_call_arguments();
/// ```
pub struct ActionInputBuilder {
    pub args: Vec<Vec<u8>>,
}

impl ActionInputBuilder {
    pub fn new() -> Self {
        Self { args: vec![] }
    }

    pub fn add<T: BorshSerialize>(&mut self, arg: T) -> &mut Self {
        self.args.push(arg.try_to_vec().unwrap());
        self
    }

    pub fn to_call_arguments(&self) -> Vec<u8> {
        self.args.try_to_vec().unwrap()
    }
}

/// Encapsulates the return value as serialized bytes from a contract action.
/// None if the action does not specify a return value.
#[derive(BorshSerialize, BorshDeserialize, Default)]
pub struct ActionOutput(Option<Vec<u8>>);

impl ActionOutput {
    pub fn set<T: BorshSerialize>(result: &T) -> Self {
        Self(Some(result.try_to_vec().unwrap()))
    }

    pub fn get(self) -> Option<Vec<u8>> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_arguments_parse_positionally() {
        let mut builder = ActionInputBuilder::new();
        builder.add(7_u64).add("genesis".to_string());

        let input = ActionInput {
            method_name: "inject".to_string(),
            arguments: builder.to_call_arguments(),
        };

        let args = input.get_multiple_arguments().unwrap();
        assert_eq!(args.len(), 2);
        let first: u64 = ActionInput::parse_multiple_arguments(&args, 0).unwrap();
        let second: String = ActionInput::parse_multiple_arguments(&args, 1).unwrap();
        assert_eq!(first, 7);
        assert_eq!(second, "genesis");
    }

    #[test]
    fn out_of_range_argument_index_is_reported() {
        let mut builder = ActionInputBuilder::new();
        builder.add(7_u64);

        let result: Result<u64, _> = ActionInput::parse_multiple_arguments(&builder.args, 1);
        assert!(matches!(
            result,
            Err(ActionError::MissingArgument { index: 1, supplied: 1 })
        ));
    }

    #[test]
    fn argument_of_the_wrong_width_is_reported() {
        let args = vec![vec![0u8; 2]];

        let result: Result<u64, _> = ActionInput::parse_multiple_arguments(&args, 0);
        assert!(matches!(result, Err(ActionError::ArgumentDecoding { index: 0, .. })));
    }

    #[test]
    fn truncated_argument_list_is_reported() {
        let input = ActionInput {
            method_name: "inject".to_string(),
            // length prefix promises four elements, none follow
            arguments: 4_u32.to_le_bytes().to_vec(),
        };

        assert!(matches!(
            input.get_multiple_arguments(),
            Err(ActionError::MalformedArguments(_))
        ));
    }
}
