use tracing_subscriber::EnvFilter;

use wordstack::console;
use wordstack::stdlib::{base_environment, distance_program, smoke_program};
use wordstack::{run, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let env = base_environment();

    match run(&env, &smoke_program()) {
        Ok(stack) => console::emit("smoke", &console::render_stack(&stack)),
        Err(halt) => console::report_halt(&halt),
    }

    match run(&env, &distance_program()) {
        Ok(stack) => console::emit("distance", &console::render_stack(&stack)),
        Err(halt) => console::report_halt(&halt),
    }

    // a deliberate miss, to show the halt report
    match run(&env, &[Value::word("missing")]) {
        Ok(stack) => console::emit("missing", &console::render_stack(&stack)),
        Err(halt) => console::report_halt(&halt),
    }
}
