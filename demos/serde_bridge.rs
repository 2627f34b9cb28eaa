//! Feeding ordinary Rust types into representation graphs.
//!
//! Run with: cargo run --example serde_bridge

use plrepr::{repr, to_string, to_string_with_options, to_value, ReprOptions, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    layers: Vec<u32>,
    rate: f64,
    pretrained: Option<String>,
}

#[derive(Debug, Serialize)]
enum Schedule {
    Constant(f64),
    Decay { start: f64, steps: u32 },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Any Serialize type converts to a Value graph.
    let config = Config {
        name: "mlp".to_string(),
        layers: vec![64, 32, 10],
        rate: 0.01,
        pretrained: None,
    };

    let value = to_value(&config)?;
    println!("Derived struct:\n{}\n", to_string(&value)?);

    // Enum variants become pairs of variant name and payload.
    println!("Newtype payload:\n{}\n", to_string(&to_value(&Schedule::Constant(0.1))?)?);
    println!(
        "Struct payload:\n{}\n",
        to_string(&to_value(&Schedule::Decay {
            start: 0.1,
            steps: 1000
        })?)?
    );

    // Two-element tuples become key:value pairs.
    let bounds = to_value(&("rate", 0.01))?;
    println!("Pair:\n{}\n", to_string(&bounds)?);

    // Build graphs dynamically with the repr! macro and mix in bridged
    // values.
    let experiment = repr!({
        "config": [1, 2],
        "tags": ["baseline", "quick"],
        "notes": null
    });
    println!("Macro-built graph:\n{}\n", to_string(&experiment)?);

    // Narrow the indentation.
    let narrow = ReprOptions::new().with_indent(2);
    println!(
        "Two-space indent:\n{}\n",
        to_string_with_options(&experiment, narrow)?
    );

    // Values can also be assembled by hand.
    let by_hand = Value::from(vec![
        Value::pair("epochs", 100),
        Value::pair("shuffle", true),
    ]);
    println!("Hand-assembled pairs:\n{}", to_string(&by_hand)?);

    Ok(())
}
