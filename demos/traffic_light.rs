//! Traffic Light State Machine
//!
//! Drives a light through a few cycles and shows an illegal transition
//! being rejected.
//!
//! Run with: RUST_LOG=traflit=trace cargo run --example traffic_light

use traflit::{LightState, Signal, TrafficLight};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = traflit::initialize();
    println!("Initial state: {}\n", light.state);

    println!("Transition sequence:");
    for cycle in 1..=2 {
        println!("  Cycle {cycle}");
        for signal in Signal::ALL {
            let ok = light.apply(signal).is_ok();
            println!("    {signal:<12} -> {} ({})", light.state, status(ok));
        }
    }

    println!("\nIllegal attempt:");
    match light.apply(Signal::TurnYellow) {
        Ok(state) => println!("  unexpectedly moved to {state}"),
        Err(err) => println!("  {err}"),
    }
    println!("  light still shows {}", light.current_state());

    println!("\nStepping without naming signals:");
    let mut stepped = TrafficLight::new();
    let mut path = vec![stepped.state];
    while path.len() < 4 {
        path.push(stepped.step());
    }
    let path: Vec<String> = path.iter().map(LightState::to_string).collect();
    println!("  {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}

fn status(ok: bool) -> &'static str {
    if ok {
        "accepted"
    } else {
        "rejected"
    }
}
