//! Exporting a nested config as environment variables.
//!
//! Run with: cargo run --example env_export

use eflat::{value, Collision, FlattenOptions, Flattener, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = value!({
        "app": {
            "name": "orders",
            "debug": false
        },
        "db": {
            "host": "localhost",
            "port": 5432,
            "replicas": ["r1", "r2"]
        },
        "features": {}
    });

    let flattener = Flattener::new(
        FlattenOptions::new()
            .with_separator("_")
            .with_collision(Collision::Reject),
    );
    let flat = flattener.flatten_value(&config)?;

    for (key, value) in flat.iter() {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("{}={}", key.to_uppercase(), rendered);
    }

    Ok(())
}
