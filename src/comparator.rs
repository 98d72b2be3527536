//! Total orders over keys.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// A comparator must be consistent for as long as a collection uses it: comparing the same two
/// values must always give the same result.
///
/// Any closure of the form `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use rb_collections::comparator::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let reverse = |left: &u32, right: &u32| right.cmp(left);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The comparator that orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
