//! Serializing object graphs that share components.
//!
//! Run with: cargo run --example shared_objects

use plrepr::{format_elements, Matrix, Repr, Session, Value};
use std::error::Error;
use std::sync::Arc;

/// A configurable component rendered as `Name( option = value, ... )`.
#[derive(Debug)]
struct Component {
    name: &'static str,
    options: Vec<(&'static str, Value)>,
}

impl Component {
    fn new(name: &'static str, options: Vec<(&'static str, Value)>) -> Arc<Self> {
        Arc::new(Component { name, options })
    }
}

impl Repr for Component {
    fn repr(&self, session: &mut Session, indent_level: usize) -> plrepr::Result<String> {
        let mut rendered = Vec::with_capacity(self.options.len());
        for (name, value) in &self.options {
            let text = session.repr_at(value, indent_level + 1)?;
            rendered.push(format!("{} = {}", name, text));
        }
        let body = format_elements(&rendered, session.options(), indent_level + 1);
        Ok(format!("{}({})", self.name, body))
    }
}

/// A bare keyword that stands for itself in the output.
#[derive(Debug)]
struct Keyword(&'static str);

impl Repr for Keyword {
    fn repr(&self, _session: &mut Session, _indent_level: usize) -> plrepr::Result<String> {
        Ok(self.0.to_string())
    }

    fn unreferenced(&self) -> bool {
        true
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // A preprocessing component shared by the train and test stages.
    let weights = Arc::new(Matrix::new(2, 2, vec![1.0, 0.0, 0.0, 1.0])?);
    let normalizer = Component::new(
        "Normalizer",
        vec![
            ("mean", Value::from(0.5)),
            ("weights", Value::matrix(weights.clone())),
        ],
    );

    let train = Component::new(
        "Trainer",
        vec![
            ("preprocess", Value::object(normalizer.clone())),
            ("epochs", Value::from(100)),
            ("mode", Value::object(Arc::new(Keyword("AUTO")))),
        ],
    );

    let test = Component::new(
        "Tester",
        vec![
            ("preprocess", Value::object(normalizer)),
            ("folds", Value::from(vec![1, 2, 3])),
        ],
    );

    // One session covers both stages, so the second graph cites the
    // normalizer instead of expanding it again.
    let mut session = Session::new();

    println!("Train stage:");
    println!("{}\n", session.repr(&Value::object(train))?);

    println!("Test stage:");
    println!("{}\n", session.repr(&Value::object(test))?);

    // The weight matrix is also cited on reuse.
    println!("Weights alone:");
    println!("{}\n", session.repr(&Value::matrix(weights))?);

    // Inspect what the session tracked.
    println!("Tracked references: {}", session.table().len());
    for record in session.table().iter() {
        println!("  *{} expands to {}", record.index(), record.expansion());
    }

    // Starting over forgets every reference.
    session.reset();
    println!("\nAfter reset: {} tracked references", session.table().len());

    Ok(())
}
