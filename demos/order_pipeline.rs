//! Minimal order pipeline: idle -> processing -> done.
//!
//! Run with `cargo run --example order_pipeline`.

use trellis::telemetry::{self, LogFormat, LogOptions};
use trellis::{Action, Machine};

#[derive(Debug)]
struct Order {
    data: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init(&LogOptions {
        filter: "debug".to_string(),
        format: LogFormat::Pretty,
        ..LogOptions::default()
    })?;

    let machine: Machine<Order> = Machine::new("idle");
    machine.register_state("processing")?;
    machine.register_state("done")?;

    let process = Action::new("process_order", |_ctx: &(), order: &mut Order| {
        order.data = format!("processed: {}", order.data);
        Ok(())
    });
    machine.add_transition("idle", "processing", "start", vec![process]);
    machine.add_transition("processing", "done", "complete", Vec::new());

    let mut order = Order {
        data: "order #1042".to_string(),
    };

    machine.trigger(&(), "start", &mut order)?;
    println!("after start: state={} data={:?}", machine.current_state(), order.data);

    machine.trigger(&(), "complete", &mut order)?;
    println!("after complete: state={}", machine.current_state());

    Ok(())
}
