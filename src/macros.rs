//! Literal construction of plain values.

/// Builds a [`Plain`](crate::Plain) tree from a JSON-like literal.
///
/// Objects become exact maps (insertion order preserved), arrays become
/// exact lists, `null` becomes `Plain::Null`, and anything else is
/// converted through `Plain::from`. Wrap a compound expression (a method
/// call, a negative literal) in parentheses to use it in value position:
///
/// ```
/// use dotmap::{plain, Opaque, Plain};
///
/// let source = plain!({
///     "a": 1,
///     "b": [2, {"c": 3}],
///     "t": (Plain::tuple([plain!(2), plain!({"c": 3})])),
///     "o": (Opaque::Map(Default::default())),
/// });
/// assert!(source.is_map());
/// ```
#[macro_export]
macro_rules! plain {
    (null) => {
        $crate::Plain::Null
    };
    ([]) => {
        $crate::Plain::List(::std::vec::Vec::new())
    };
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Plain::List(::std::vec![ $( $crate::plain!($elem) ),+ ])
    };
    ({}) => {
        $crate::Plain::Map($crate::PlainMap::new())
    };
    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut map = $crate::PlainMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::plain!($value));
        )+
        $crate::Plain::Map(map)
    }};
    ($other:expr) => {
        $crate::Plain::from($other)
    };
}
