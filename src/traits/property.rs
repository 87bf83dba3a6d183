/// A boolean check that can be applied to an element of type `T`.
///
/// Implementations must be pure: the answer depends only on `element`.
/// Closures of type `Fn(&T) -> bool` are properties too, so one-off
/// checks don't need a named type:
///
/// ```
/// use tally::{count_elements_with_property, Property};
///
/// let negative = |n: &i64| *n < 0;
/// assert!(negative.has_property(&-4));
/// assert_eq!(count_elements_with_property(&[-1, 2, -3], &negative), 2);
/// ```
pub trait Property<T: ?Sized> {
    /// Returns true if the element has the property
    fn has_property(&self, element: &T) -> bool;
}

impl<T: ?Sized, F> Property<T> for F
where
    F: Fn(&T) -> bool,
{
    fn has_property(&self, element: &T) -> bool {
        self(element)
    }
}
