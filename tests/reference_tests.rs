use plrepr::{
    format_elements, Error, Matrix, RefTable, Repr, Result, Session, Value,
};
use std::sync::Arc;

/// A configurable component that renders itself as `Name( key = value, ... )`.
#[derive(Debug)]
struct Learner {
    name: &'static str,
    options: Vec<(&'static str, Value)>,
}

impl Learner {
    fn new(name: &'static str, options: Vec<(&'static str, Value)>) -> Arc<Self> {
        Arc::new(Learner { name, options })
    }
}

impl Repr for Learner {
    fn repr(&self, session: &mut Session, indent_level: usize) -> Result<String> {
        let mut rendered = Vec::with_capacity(self.options.len());
        for (name, value) in &self.options {
            let text = session.repr_at(value, indent_level + 1)?;
            rendered.push(format!("{} = {}", name, text));
        }
        let body = format_elements(&rendered, session.options(), indent_level + 1);
        Ok(format!("{}({})", self.name, body))
    }
}

/// A bare keyword that stands for itself and never takes a reference index.
#[derive(Debug)]
struct Keyword(&'static str);

impl Repr for Keyword {
    fn repr(&self, _session: &mut Session, _indent_level: usize) -> Result<String> {
        Ok(self.0.to_string())
    }

    fn unreferenced(&self) -> bool {
        true
    }
}

#[test]
fn test_first_occurrence_expands_then_cites() {
    let learner = Learner::new("Learner", vec![("seed", Value::from(42))]);
    let value = Value::object(learner);
    let mut session = Session::new();

    let first = session.repr(&value).unwrap();
    assert_eq!(first, "*1 -> Learner( seed = 42 );");

    let second = session.repr(&value).unwrap();
    assert_eq!(second, "*1");
}

#[test]
fn test_sharing_within_one_graph() {
    let learner = Learner::new("Learner", vec![("seed", Value::from(42))]);
    let graph = Value::from(vec![
        Value::object(learner.clone()),
        Value::object(learner),
    ]);

    let text = plrepr::to_string(&graph).unwrap();
    println!("Shared graph:\n{}", text);
    assert_eq!(text, "[\n    *1 -> Learner( seed = 42 );,\n    *1\n    ]");
}

#[test]
fn test_distinct_allocations_get_distinct_indices() {
    // Equal contents, separate allocations: sharing follows identity.
    let first = Learner::new("Learner", vec![("seed", Value::from(7))]);
    let second = Learner::new("Learner", vec![("seed", Value::from(7))]);
    let graph = Value::from(vec![Value::object(first), Value::object(second)]);

    let text = plrepr::to_string(&graph).unwrap();
    assert_eq!(
        text,
        "[\n    *1 -> Learner( seed = 7 );,\n    *2 -> Learner( seed = 7 );\n    ]"
    );
}

#[test]
fn test_unreferenced_objects_bypass_the_table() {
    let keyword = Arc::new(Keyword("AUTO"));
    let value = Value::object(keyword);
    let mut session = Session::new();

    assert_eq!(session.repr(&value).unwrap(), "AUTO");
    assert_eq!(session.repr(&value).unwrap(), "AUTO");
    assert!(session.table().is_empty());
}

#[test]
fn test_matrix_sharing_in_one_session() {
    let weights = Arc::new(Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap());
    let value = Value::matrix(weights);
    let mut session = Session::new();

    assert_eq!(session.repr(&value).unwrap(), "*1 -> 2 2 [1, 2, 3, 4];");
    assert_eq!(session.repr(&value).unwrap(), "*1");
}

#[test]
fn test_atoms_are_never_tracked() {
    let mut session = Session::new();
    session.repr(&Value::from(1)).unwrap();
    session.repr(&Value::from("text")).unwrap();
    session.repr(&Value::Bool(true)).unwrap();
    session.repr(&Value::Null).unwrap();
    session.repr(&Value::from(vec![1, 2, 3])).unwrap();

    assert!(session.table().is_empty());
}

#[test]
fn test_reset_restarts_numbering() {
    let learner = Learner::new("KNN", vec![]);
    let value = Value::object(learner);
    let mut session = Session::new();

    assert_eq!(session.repr(&value).unwrap(), "*1 -> KNN( );");
    assert_eq!(session.repr(&value).unwrap(), "*1");

    session.reset();
    assert!(session.table().is_empty());
    assert_eq!(session.repr(&value).unwrap(), "*1 -> KNN( );");
}

#[test]
fn test_nested_components_get_smaller_indices() {
    // The inner component finishes rendering first, so it registers first.
    let step = Learner::new("PCA", vec![]);
    let chain = Learner::new("Chain", vec![("step", Value::object(step))]);
    let mut session = Session::new();

    let text = session.repr(&Value::object(chain)).unwrap();
    assert_eq!(text, "*2 -> Chain( step = *1 -> PCA( ); );");
}

#[test]
fn test_shared_component_across_two_graphs() {
    let shared = Learner::new("Normalizer", vec![("mean", Value::from(0.5))]);
    let trainer = Learner::new(
        "Trainer",
        vec![("preprocess", Value::object(shared.clone()))],
    );
    let tester = Learner::new(
        "Tester",
        vec![("preprocess", Value::object(shared))],
    );

    let mut session = Session::new();
    let first = session.repr(&Value::object(trainer)).unwrap();
    let second = session.repr(&Value::object(tester)).unwrap();
    println!("First graph: {}\nSecond graph: {}", first, second);

    assert_eq!(first, "*2 -> Trainer( preprocess = *1 -> Normalizer( mean = 0.5 ); );");
    assert_eq!(second, "*3 -> Tester( preprocess = *1 );");
}

#[test]
fn test_duplicate_insertion_is_rejected() {
    let learner = Learner::new("KNN", vec![]);
    let value = Value::object(learner);
    let mut table = RefTable::new();

    table.insert(&value, "KNN( )").unwrap();
    let err = table.insert(&value, "KNN( )").unwrap_err();

    assert!(matches!(err, Error::DuplicateReference { index: 1 }));
    assert_eq!(
        err.to_string(),
        "Reference *1 is already registered; representations can not be updated"
    );
}

#[test]
fn test_insert_requires_identity() {
    let mut table = RefTable::new();

    let err = table.insert(&Value::from(5), "5").unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));

    let err = table
        .insert(&Value::object(Arc::new(Keyword("AUTO"))), "AUTO")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));
}

#[test]
fn test_table_inspection() {
    let first = Learner::new("A", vec![]);
    let second = Learner::new("B", vec![]);
    let first_value = Value::object(first);
    let second_value = Value::object(second);

    let mut session = Session::new();
    session.repr(&first_value).unwrap();
    session.repr(&second_value).unwrap();

    let table = session.table();
    assert_eq!(table.len(), 2);

    let first_id = first_value.identity().unwrap();
    let second_id = second_value.identity().unwrap();
    assert_eq!(table.index_of(first_id), Some(1));
    assert_eq!(table.index_of(second_id), Some(2));

    // Records iterate in registration order.
    let expansions: Vec<&str> = table.iter().map(|r| r.expansion()).collect();
    assert_eq!(expansions, vec!["A( )", "B( )"]);

    let record = table.record(first_id).unwrap();
    assert_eq!(record.index(), 1);
    assert!(record.is_expanded());
    assert_eq!(record.short_form(), "*1");
    assert_eq!(record.long_form(), "*1 -> A( );");
}

#[test]
fn test_multiline_expansion_inside_list() {
    // A component with two options renders across several lines; the list
    // layout pads around the whole long form.
    let learner = Learner::new(
        "Learner",
        vec![("seed", Value::from(42)), ("rate", Value::from(0.01))],
    );
    let graph = Value::from(vec![Value::object(learner.clone()), Value::object(learner)]);

    let text = plrepr::to_string(&graph).unwrap();
    println!("Multiline expansion:\n{}", text);
    assert_eq!(
        text,
        "[\n    *1 -> Learner(\n        seed = 42,\n        rate = 0.01\n        );,\n    *1\n    ]"
    );
}
