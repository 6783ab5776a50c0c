/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Defines the ways a call payload can fail before it reaches an action body. The contract
//! performs no validation of its own beyond decoding the payload; anything here ends the
//! call through [abort], i.e. through the host's generic failure path.

use std::io;

use thiserror::Error;

/// An error raised while selecting an action or decoding its arguments.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The invoking transaction named an action this contract does not expose.
    #[error("no action named `{0}` is exposed by this contract")]
    UnknownMethod(String),

    /// The call's `arguments` bytes are not a borsh-encoded argument list.
    #[error("call arguments are not a well-formed argument list: {0}")]
    MalformedArguments(io::Error),

    /// The argument list is shorter than the action's signature.
    #[error("argument {index} is missing: the call supplied {supplied} argument(s)")]
    MissingArgument { index: usize, supplied: usize },

    /// One positional argument does not decode into the action's parameter type.
    #[error("argument {index} could not be decoded: {source}")]
    ArgumentDecoding { index: usize, source: io::Error },
}

/// Ends the call with `err`'s message. On the chain this is a WASM trap: the transaction
/// fails and the host rolls its effects back, indistinguishably from any other trap.
pub fn abort(err: ActionError) -> ! {
    panic!("{}", err)
}
