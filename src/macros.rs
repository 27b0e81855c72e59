/// Builds a [`Node`](crate::Node) tree from JSON-like literal syntax.
///
/// String keys map to objects, brackets to lists and every other expression
/// to a scalar through `Node::from`. Object keys are inserted in order; a
/// repeated key replaces the earlier value.
///
/// ```rust
/// use ccl::{ccl, load};
///
/// let doc = ccl!({
///     "name": "app",
///     "servers": ["web1", "web2"],
///     "db": {"host": "localhost"}
/// });
/// assert_eq!(doc, load("name = app\nservers = web1\nservers = web2\ndb =\n  host = localhost"));
/// ```
#[macro_export]
macro_rules! ccl {
    // Handle empty list
    ([]) => {
        $crate::Node::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::List(vec![$($crate::ccl!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Node::Object($crate::CclMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::CclMap::new();
        $(
            object.insert($key.to_string(), $crate::ccl!($value));
        )*
        $crate::Node::Object(object)
    }};

    // Scalars
    ($s:expr) => {
        $crate::Node::from($s)
    };
}
