//! Order-preserving selection over slices.

/// Copies out every element of `values` for which `predicate` holds,
/// keeping their relative order. `values` is left untouched.
pub fn filter_by<T, F>(values: &[T], mut predicate: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T) -> bool,
{
    values.iter().copied().filter(|v| predicate(v)).collect()
}

pub fn is_negative<T>(value: &T) -> bool
where
    T: PartialOrd + From<i8>,
{
    *value < T::from(0)
}

/// Selects the values strictly below zero.
///
/// ```
/// use neg_filter::core::filter::filter_negative;
///
/// assert_eq!(filter_negative(&[3, -1, 4, -2]), vec![-1, -2]);
/// ```
pub fn filter_negative<T>(values: &[T]) -> Vec<T>
where
    T: Copy + PartialOrd + From<i8>,
{
    filter_by(values, is_negative::<T>)
}
