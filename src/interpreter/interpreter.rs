use tracing::{debug, trace};

use crate::interpreter::environment::Environment;
use crate::interpreter::error::{EngineError, RunHalted};
use crate::interpreter::stack::Stack;
use crate::interpreter::value::Value;

/// Execute `program` against `env` on a fresh stack, starting at the first
/// instruction. Returns the final stack, or a halt report at the first
/// failure.
pub fn run(env: &Environment, program: &[Value]) -> Result<Stack, RunHalted> {
    resume(env, program, 0, Stack::new())
}

/// Execute `program` from instruction `start` with a primed stack. This is
/// the resumption entrypoint; `run` is the common case.
///
/// Per step: read the instruction, resolve a word through the environment
/// at most once, then dispatch. A primitive is invoked against the current
/// stack and replaces it with its result; every other value is pushed as a
/// literal. A word that resolves to another word is NOT resolved again:
/// the resolved word lands on the stack as data. Single-level indirection
/// is deliberate, observable behavior.
pub fn resume(
    env: &Environment,
    program: &[Value],
    start: usize,
    mut stack: Stack,
) -> Result<Stack, RunHalted> {
    let mut pc = start;
    while let Some(instr) = program.get(pc) {
        trace!(pc, instr = %instr, "step");
        let resolved = match instr {
            Value::Word(symbol) => match env.lookup(symbol) {
                Ok(value) => value,
                Err(error) => {
                    debug!(pc, %error, "halt");
                    return Err(RunHalted { error, pc, stack });
                }
            },
            other => other.clone(),
        };
        match resolved {
            Value::Primitive(prim) => {
                // keep the pre-step stack so a failing primitive still
                // surfaces everything the earlier steps did
                let before = stack.clone();
                match prim.invoke(stack) {
                    Ok(next) => stack = next,
                    Err(error) => {
                        // an underflow inside a primitive is an arity
                        // problem at the call site, report it as one
                        let error = match error {
                            EngineError::StackUnderflow => EngineError::ArityMismatch,
                            other => other,
                        };
                        debug!(pc, %error, primitive = prim.name(), "halt");
                        return Err(RunHalted {
                            error,
                            pc,
                            stack: before,
                        });
                    }
                }
            }
            other => stack.push(other),
        }
        pc += 1;
    }
    Ok(stack)
}
