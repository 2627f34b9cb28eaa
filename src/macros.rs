#[macro_export]
macro_rules! repr {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::repr!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::Value::Map($crate::ReprMap::new())
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ReprMap::new();
        $(
            map.insert($key, $crate::repr!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for any expression, including tuples which become pairs
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
