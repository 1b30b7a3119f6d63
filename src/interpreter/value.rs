use std::fmt;
use std::rc::Rc;

use crate::interpreter::error::EngineError;
use crate::interpreter::stack::Stack;

/// Host function contract for primitives: take the current operand stack,
/// hand back the transformed one (or fail).
pub type PrimitiveImpl = dyn Fn(Stack) -> Result<Stack, EngineError>;

/// A named host-operation capability. The engine only ever sees this
/// wrapper, never a bare callable.
#[derive(Clone)]
pub struct PrimitiveFn {
    name: String,
    func: Rc<PrimitiveImpl>,
}

impl PrimitiveFn {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(Stack) -> Result<Stack, EngineError> + 'static,
    ) -> Self {
        PrimitiveFn {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the wrapped host function to the stack.
    pub fn invoke(&self, stack: Stack) -> Result<Stack, EngineError> {
        (self.func)(stack)
    }
}

impl fmt::Debug for PrimitiveFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<primitive {}>", self.name)
    }
}

// Two primitives are the same capability, not merely the same name.
impl PartialEq for PrimitiveFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

/// Everything a program can hold and operate on. Each value carries exactly
/// one tag; the core never coerces between variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    /// A symbolic reference, resolved against the environment.
    Word(String),
    /// A host operation embedded as a value.
    Primitive(PrimitiveFn),
}

/// A program is an ordered sequence of values: source code and runtime data
/// at once. A word pushed literally is indistinguishable from a word that
/// appeared as an instruction.
pub type Program = Vec<Value>;

impl Value {
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn word(symbol: impl Into<String>) -> Self {
        Value::Word(symbol.into())
    }

    pub fn primitive(
        name: impl Into<String>,
        func: impl Fn(Stack) -> Result<Stack, EngineError> + 'static,
    ) -> Self {
        Value::Primitive(PrimitiveFn::new(name, func))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "({})", s.replace(')', "\\)")),
            Value::Word(w) => write!(f, "{w}"),
            Value::Primitive(p) => write!(f, "<{}>", p.name()),
        }
    }
}
