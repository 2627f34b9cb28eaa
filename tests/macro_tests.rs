use plrepr::{repr, Number, ReprMap, Value};

#[test]
fn test_repr_macro_null() {
    let value = repr!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_repr_macro_booleans() {
    let true_val = repr!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = repr!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_repr_macro_numbers() {
    let int_val = repr!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = repr!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = repr!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_repr_macro_strings() {
    let string_val = repr!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = repr!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_repr_macro_lists() {
    let empty_list = repr!([]);
    assert_eq!(empty_list, Value::List(vec![]));

    let number_list = repr!([1, 2, 3]);
    assert_eq!(
        number_list,
        Value::List(vec![
            Value::Number(Number::Integer(1)),
            Value::Number(Number::Integer(2)),
            Value::Number(Number::Integer(3)),
        ])
    );

    let mixed_list = repr!([1, "hello", true, null]);
    assert_eq!(
        mixed_list,
        Value::List(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_repr_macro_maps() {
    let empty_map = repr!({});
    assert_eq!(empty_map, Value::Map(ReprMap::new()));

    let simple_map = repr!({
        "name": "Alice",
        "age": 30
    });

    match simple_map {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_repr_macro_numeric_keys() {
    let map = repr!({ 1: "one", 2: "two" });

    match map {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get(1), Some(&Value::String("one".to_string())));
            assert_eq!(map.get(2), Some(&Value::String("two".to_string())));
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_repr_macro_pairs_from_tuples() {
    let pair = repr!((0, "first"));
    assert_eq!(pair, Value::pair(0, "first"));
    assert!(pair.is_pair());

    let (first, second) = pair.as_pair().unwrap();
    assert_eq!(first, &Value::Number(Number::Integer(0)));
    assert_eq!(second, &Value::String("first".to_string()));
}

#[test]
fn test_repr_macro_expression_fallback() {
    let from_vec = repr!(vec![1, 2, 3]);
    assert_eq!(from_vec.as_list().map(Vec::len), Some(3));

    let n = 5;
    let from_variable = repr!(n);
    assert_eq!(from_variable, Value::Number(Number::Integer(5)));
}

#[test]
fn test_repr_macro_nested() {
    let nested = repr!({
        "learner": {
            "seed": 123,
            "name": "knn",
            "trace": true
        },
        "folds": [1, 2],
        "count": 42
    });

    match nested {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 3);

            // Check learner map
            if let Some(Value::Map(learner)) = map.get("learner") {
                assert_eq!(
                    learner.get("seed"),
                    Some(&Value::Number(Number::Integer(123)))
                );
                assert_eq!(
                    learner.get("name"),
                    Some(&Value::String("knn".to_string()))
                );
                assert_eq!(learner.get("trace"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected learner to be a map");
            }

            // Check folds list
            if let Some(Value::List(folds)) = map.get("folds") {
                assert_eq!(folds.len(), 2);
                assert_eq!(folds[0], Value::Number(Number::Integer(1)));
                assert_eq!(folds[1], Value::Number(Number::Integer(2)));
            } else {
                panic!("Expected folds to be a list");
            }

            // Check count
            assert_eq!(map.get("count"), Some(&Value::Number(Number::Integer(42))));
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_repr_macro_trailing_commas() {
    let list = repr!([1, 2,]);
    assert_eq!(list.as_list().map(Vec::len), Some(2));

    let map = repr!({ "a": 1, });
    assert_eq!(map.as_map().map(ReprMap::len), Some(1));
}

#[test]
fn test_value_methods() {
    let null_val = repr!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_list());
    assert!(!null_val.is_map());
    assert!(!null_val.is_pair());
    assert!(!null_val.is_matrix());
    assert!(!null_val.is_object());

    let bool_val = repr!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = repr!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let list_val = repr!([1, 2, 3]);
    assert!(list_val.is_list());
    assert_eq!(list_val.as_list().unwrap().len(), 3);

    let map_val = repr!({"key": "value"});
    assert!(map_val.is_map());
    assert_eq!(map_val.as_map().unwrap().len(), 1);
}
