//! Macros for ergonomic style construction.

/// Build a [`Style`](crate::core::Style) from literal pairs.
///
/// # Example
///
/// ```
/// use segue::style;
///
/// let base = style! {
///     "opacity" => "0",
///     "transition" => "opacity 300ms ease",
/// };
///
/// assert_eq!(base.get("opacity"), Some("0"));
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::core::Style::new()
    };
    ( $( $property:expr => $value:expr ),+ $(,)? ) => {{
        let mut style = $crate::core::Style::new();
        $( style.set($property, $value); )+
        style
    }};
}
