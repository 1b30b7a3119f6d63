//! The base word library and the demo programs. Everything here is a plain
//! consumer of the engine: builders stack `define` calls on an environment,
//! primitives speak the `Stack -> Result<Stack, _>` contract, and nothing
//! reaches into engine internals.

use tracing::debug;

use crate::interpreter::environment::Environment;
use crate::interpreter::error::EngineError;
use crate::interpreter::stack::Stack;
use crate::interpreter::value::{Program, Value};

/// A library extension: takes the environment built so far, returns it with
/// more words installed. Extensions compose by listing; `build_environment`
/// folds them left to right, so later builders may overwrite earlier words.
pub type Builder = fn(Environment) -> Environment;

/// The base library, in install order.
pub const BASE_BUILDERS: &[Builder] = &[install_arithmetic, install_stack_ops];

/// Fold `builders` over a fresh environment.
pub fn build_environment(builders: &[Builder]) -> Environment {
    builders
        .iter()
        .fold(Environment::new(), |env, install| install(env))
}

/// A fresh environment with the whole base library installed.
pub fn base_environment() -> Environment {
    build_environment(BASE_BUILDERS)
}

fn pop_number(stack: &mut Stack) -> Result<f64, EngineError> {
    match stack.pop()? {
        Value::Number(n) => Ok(n),
        _ => Err(EngineError::ArityMismatch),
    }
}

fn binary(name: &'static str, op: fn(f64, f64) -> f64) -> Value {
    Value::primitive(name, move |mut stack: Stack| {
        let b = pop_number(&mut stack)?;
        let a = pop_number(&mut stack)?;
        stack.push(Value::Number(op(a, b)));
        Ok(stack)
    })
}

fn unary(name: &'static str, op: fn(f64) -> f64) -> Value {
    Value::primitive(name, move |mut stack: Stack| {
        let n = pop_number(&mut stack)?;
        stack.push(Value::Number(op(n)));
        Ok(stack)
    })
}

/// Arithmetic over numbers. Division follows IEEE-754, so `0 /` yields an
/// infinity rather than a failure.
pub fn install_arithmetic(env: Environment) -> Environment {
    debug!("installing arithmetic words");
    env.define("+", binary("+", |a, b| a + b))
        .define("-", binary("-", |a, b| a - b))
        .define("*", binary("*", |a, b| a * b))
        .define("/", binary("/", |a, b| a / b))
        .define("neg", unary("neg", |n| -n))
        .define("abs", unary("abs", f64::abs))
        .define("sqrt", unary("sqrt", f64::sqrt))
}

/// Stack shuffling words.
pub fn install_stack_ops(env: Environment) -> Environment {
    debug!("installing stack words");
    env.define(
        "dup",
        Value::primitive("dup", |mut stack: Stack| {
            let top = stack.top()?.clone();
            stack.push(top);
            Ok(stack)
        }),
    )
    .define(
        "exch",
        Value::primitive("exch", |mut stack: Stack| {
            let b = stack.pop()?;
            let a = stack.pop()?;
            stack.push(b);
            stack.push(a);
            Ok(stack)
        }),
    )
    .define(
        "pop",
        Value::primitive("pop", |mut stack: Stack| {
            stack.pop()?;
            Ok(stack)
        }),
    )
    .define(
        "clear",
        Value::primitive("clear", |mut stack: Stack| {
            stack.clear();
            Ok(stack)
        }),
    )
    .define(
        "count",
        Value::primitive("count", |mut stack: Stack| {
            let n = stack.depth() as f64;
            stack.push(Value::Number(n));
            Ok(stack)
        }),
    )
}

/// `1 2 +`, the minimal end-to-end exercise.
pub fn smoke_program() -> Program {
    vec![Value::number(1.0), Value::number(2.0), Value::word("+")]
}

/// Distance from the origin to (3, 4): `0 3 - dup * 0 4 - dup * + sqrt`.
pub fn distance_program() -> Program {
    vec![
        Value::number(0.0),
        Value::number(3.0),
        Value::word("-"),
        Value::word("dup"),
        Value::word("*"),
        Value::number(0.0),
        Value::number(4.0),
        Value::word("-"),
        Value::word("dup"),
        Value::word("*"),
        Value::word("+"),
        Value::word("sqrt"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpreter::run;
    use pretty_assertions::assert_eq;

    #[test]
    fn smoke_adds_one_and_two() {
        let env = base_environment();
        let stack = run(&env, &smoke_program()).unwrap();
        assert_eq!(stack, Stack::from(vec![Value::number(3.0)]));
    }

    #[test]
    fn distance_of_three_four_is_five() {
        let env = base_environment();
        let stack = run(&env, &distance_program()).unwrap();
        assert_eq!(stack, Stack::from(vec![Value::number(5.0)]));
    }

    #[test]
    fn subtraction_is_ordered() {
        let env = base_environment();
        let program = vec![Value::number(10.0), Value::number(4.0), Value::word("-")];
        let stack = run(&env, &program).unwrap();
        assert_eq!(stack, Stack::from(vec![Value::number(6.0)]));
    }

    #[test]
    fn dup_exch_pop() {
        let env = base_environment();
        let program = vec![
            Value::number(1.0),
            Value::number(2.0),
            Value::word("dup"),  // 1 2 2
            Value::word("pop"),  // 1 2
            Value::word("exch"), // 2 1
        ];
        let stack = run(&env, &program).unwrap();
        assert_eq!(
            stack,
            Stack::from(vec![Value::number(2.0), Value::number(1.0)])
        );
    }

    #[test]
    fn count_pushes_the_depth() {
        let env = base_environment();
        let program = vec![
            Value::string("a"),
            Value::string("b"),
            Value::word("count"),
        ];
        let stack = run(&env, &program).unwrap();
        assert_eq!(stack.top(), Ok(&Value::number(2.0)));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn clear_empties_the_stack() {
        let env = base_environment();
        let program = vec![
            Value::number(1.0),
            Value::number(2.0),
            Value::word("clear"),
        ];
        let stack = run(&env, &program).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn arithmetic_on_a_string_is_an_arity_mismatch() {
        let env = base_environment();
        let program = vec![
            Value::number(1.0),
            Value::string("two"),
            Value::word("+"),
        ];
        let halt = run(&env, &program).unwrap_err();
        assert_eq!(halt.error, EngineError::ArityMismatch);
        assert_eq!(halt.pc, 2);
    }

    #[test]
    fn later_builders_overwrite_earlier_words() {
        fn shadow_plus(env: Environment) -> Environment {
            env.define("+", Value::number(0.0))
        }
        let env = build_environment(&[install_arithmetic, shadow_plus]);
        assert_eq!(env.lookup("+"), Ok(Value::number(0.0)));
    }

    #[test]
    fn builder_list_is_explicit_and_ordered() {
        // each run folds its own fresh environment, nothing leaks between runs
        let a = base_environment();
        let b = base_environment();
        assert_eq!(a.len(), b.len());
        assert!(a.contains("sqrt"));
        assert!(a.contains("dup"));
    }
}
