//! The `pvector!` macro for building a [`PersistentVector`](crate::persistent::PersistentVector)
//! from a list of elements.

/// Creates a [`PersistentVector`](crate::persistent::PersistentVector)
/// holding the given elements in order.
///
/// `pvector![a, b, c]` is equivalent to
/// `PersistentVector::from_array(vec![a, b, c])`.
///
/// # Syntax
///
/// - `pvector![]` - The empty vector
/// - `pvector![x; n]` - `n` clones of `x`
/// - `pvector![a, b, c]` - The listed elements
///
/// # Examples
///
/// ```
/// use pvector::persistent::PersistentVector;
/// use pvector::pvector;
///
/// let vector = pvector![1, 2, 3];
/// assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3)]);
///
/// let zeros = pvector![0; 40];
/// assert_eq!(zeros.len(), 40);
///
/// let empty: PersistentVector<i32> = pvector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! pvector {
    () => {
        $crate::persistent::PersistentVector::new()
    };
    ($element:expr; $count:expr) => {
        $crate::persistent::PersistentVector::from_array(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::PersistentVector::from_array(::std::vec![$($element),+])
    };
}
