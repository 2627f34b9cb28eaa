use plrepr::{repr, to_string, to_string_with_options, Matrix, ReprOptions, Value};
use std::sync::Arc;

#[test]
fn test_integers() {
    assert_eq!(to_string(&Value::from(0)).unwrap(), "0");
    assert_eq!(to_string(&Value::from(42)).unwrap(), "42");
    assert_eq!(to_string(&Value::from(-17)).unwrap(), "-17");
    assert_eq!(to_string(&Value::from(i64::MAX)).unwrap(), "9223372036854775807");
    assert_eq!(to_string(&Value::from(i64::MIN)).unwrap(), "-9223372036854775808");
}

#[test]
fn test_floats() {
    assert_eq!(to_string(&Value::from(2.5)).unwrap(), "2.5");
    assert_eq!(to_string(&Value::from(-0.25)).unwrap(), "-0.25");
    assert_eq!(to_string(&Value::from(0.2)).unwrap(), "0.2");

    // Integral floats print without a trailing ".0".
    assert_eq!(to_string(&Value::from(1.0)).unwrap(), "1");
    assert_eq!(to_string(&Value::from(-3.0)).unwrap(), "-3");
}

#[test]
fn test_booleans() {
    assert_eq!(to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(to_string(&Value::Bool(false)).unwrap(), "false");
}

#[test]
fn test_null_token() {
    assert_eq!(to_string(&Value::Null).unwrap(), "*0;");
}

#[test]
fn test_string_quoting() {
    assert_eq!(to_string(&Value::from("hello")).unwrap(), "\"hello\"");
    assert_eq!(to_string(&Value::from("")).unwrap(), "\"\"");

    // Only double quotes are escaped.
    assert_eq!(
        to_string(&Value::from("say \"hi\"")).unwrap(),
        "\"say \\\"hi\\\"\""
    );

    // Backslashes and other characters pass through untouched.
    assert_eq!(to_string(&Value::from("a\\b")).unwrap(), "\"a\\b\"");
    assert_eq!(to_string(&Value::from("tab\there")).unwrap(), "\"tab\there\"");
}

#[test]
fn test_empty_containers() {
    assert_eq!(to_string(&repr!([])).unwrap(), "[ ]");
    assert_eq!(to_string(&repr!({})).unwrap(), "{ }");
}

#[test]
fn test_single_element_list() {
    assert_eq!(to_string(&repr!([42])).unwrap(), "[ 42 ]");
    assert_eq!(to_string(&repr!(["only"])).unwrap(), "[ \"only\" ]");
}

#[test]
fn test_single_multiline_element() {
    // A lone element containing a newline is laid out on its own lines
    // instead of being padded with spaces.
    let value = repr!(["line1\nline2"]);
    let text = to_string(&value).unwrap();
    assert_eq!(text, "[\n    \"line1\nline2\"\n    ]");
}

#[test]
fn test_multi_element_list() {
    let text = to_string(&repr!([1, 2, 3])).unwrap();
    println!("List layout:\n{}", text);
    assert_eq!(text, "[\n    1,\n    2,\n    3\n    ]");
}

#[test]
fn test_nested_list_indentation() {
    let text = to_string(&repr!([[1, 2], 3])).unwrap();
    println!("Nested layout:\n{}", text);
    assert_eq!(
        text,
        "[\n    [\n        1,\n        2\n        ],\n    3\n    ]"
    );
}

#[test]
fn test_list_with_null_element() {
    let text = to_string(&repr!([1, null, "x"])).unwrap();
    assert_eq!(text, "[\n    1,\n    *0;,\n    \"x\"\n    ]");
}

#[test]
fn test_map_entries() {
    let text = to_string(&repr!({ "a": 1, "b": 2 })).unwrap();
    println!("Map layout:\n{}", text);
    assert_eq!(text, "{\n    \"a\" : 1,\n    \"b\" : 2\n    }");
}

#[test]
fn test_single_entry_map() {
    let text = to_string(&repr!({ "only": 1 })).unwrap();
    assert_eq!(text, "{ \"only\" : 1 }");
}

#[test]
fn test_map_values_render_at_parent_level() {
    // Entry values are rendered at the map's own level, so a nested list
    // lines up with the surrounding entries.
    let text = to_string(&repr!({ "layers": [10, 5], "bias": true })).unwrap();
    println!("Map with nested list:\n{}", text);
    assert_eq!(
        text,
        "{\n    \"layers\" : [\n    10,\n    5\n    ],\n    \"bias\" : true\n    }"
    );
}

#[test]
fn test_non_string_map_keys() {
    let mut map = plrepr::ReprMap::new();
    map.insert(1, "one");
    let text = to_string(&Value::Map(map)).unwrap();
    assert_eq!(text, "{ 1 : \"one\" }");
}

#[test]
fn test_collected_map_preserves_order() {
    let map: plrepr::ReprMap = vec![("b", 2), ("a", 1)].into_iter().collect();
    let text = to_string(&Value::Map(map)).unwrap();
    assert_eq!(text, "{\n    \"b\" : 2,\n    \"a\" : 1\n    }");
}

#[test]
fn test_pair_layout() {
    assert_eq!(to_string(&Value::pair(0, "first")).unwrap(), "0:\"first\"");

    // Pair sides stay at the pair's own level.
    let text = to_string(&Value::pair("xs", vec![1, 2])).unwrap();
    assert_eq!(text, "\"xs\":[\n    1,\n    2\n    ]");
}

#[test]
fn test_matrix_display() {
    let matrix = Matrix::new(1, 3, vec![1.0, 0.2, -3.5]).unwrap();
    assert_eq!(matrix.to_string(), "1 3 [1, 0.2, -3.5]");

    let empty = Matrix::new(0, 0, vec![]).unwrap();
    assert_eq!(empty.to_string(), "0 0 []");
}

#[test]
fn test_matrix_in_graph_is_tracked() {
    let matrix = Arc::new(Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap());
    let text = to_string(&Value::matrix(matrix)).unwrap();
    assert_eq!(text, "*1 -> 2 2 [1, 2, 3, 4];");
}

#[test]
fn test_custom_indent_width() {
    let narrow = ReprOptions::new().with_indent(2);
    let text = to_string_with_options(&repr!([1, 2]), narrow).unwrap();
    assert_eq!(text, "[\n  1,\n  2\n  ]");

    let flat = ReprOptions::new().with_indent(0);
    let text = to_string_with_options(&repr!([1, 2]), flat).unwrap();
    assert_eq!(text, "[\n1,\n2\n]");
}

#[test]
fn test_deep_nesting_padding() {
    let text = to_string(&repr!([[[1]]])).unwrap();
    // Levels pad with 4 spaces each; single elements stay on one line.
    assert_eq!(text, "[ [ [ 1 ] ] ]");
}

#[test]
fn test_mixed_graph() {
    let value = repr!({
        "name": "experiment",
        "seeds": [17, 43],
        "rate": 0.01
    });

    let text = to_string(&value).unwrap();
    println!("Mixed graph:\n{}", text);
    assert_eq!(
        text,
        "{\n    \"name\" : \"experiment\",\n    \"seeds\" : [\n    17,\n    43\n    ],\n    \"rate\" : 0.01\n    }"
    );
}
