use thiserror::Error;

use crate::interpreter::stack::Stack;

/// The ways an engine operation can fail. Every fallible path in the core
/// returns one of these; nothing is reported through sentinels or panics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A pop or peek asked for more than the stack holds.
    #[error("stackunderflow")]
    StackUnderflow,

    /// A word was resolved against an environment that does not bind it.
    #[error("undefined name {0}")]
    UnboundWord(String),

    /// A primitive ran out of operands (or received ones it cannot use).
    #[error("aritymismatch")]
    ArityMismatch,
}

/// Failure report from an interpreter run: the error itself, the program
/// counter of the failing instruction, and the stack as it stood before that
/// instruction executed. Mutations from earlier steps are still visible in
/// the snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error} at instruction {pc}")]
pub struct RunHalted {
    pub error: EngineError,
    pub pc: usize,
    pub stack: Stack,
}
