//! Console presentation for runs: tag/payload lines and stack rendering.
//! Display only, the engine never depends on this module.

use std::io::{self, Write};

use crate::interpreter::error::RunHalted;
use crate::interpreter::stack::Stack;

/// Print one `tag: payload` line, flushed so output interleaves predictably
/// with anything else on stdout.
pub fn emit(tag: &str, payload: &str) {
    println!("{tag}: {payload}");
    let _ = io::stdout().flush();
}

/// Render a stack bottom to top.
pub fn render_stack(stack: &Stack) -> String {
    stack.to_string()
}

/// Report a halted run: the error with its program counter, then the stack
/// snapshot from the halt.
pub fn report_halt(halt: &RunHalted) {
    emit("error", &halt.to_string());
    emit("stack", &render_stack(&halt.stack));
}
