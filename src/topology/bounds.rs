//! Common bound aliases used across topology code.
//!
//! [`VertexLike`] and [`PayloadLike`] have blanket impls, so any type
//! satisfying the underlying bounds implements them automatically.
//! [`FiltrationLike`] is implemented for the primitive numeric types.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use num_traits::PrimInt;

/// Canonical bound set for vertex handles.
///
/// - `Copy` for cheap pass-by-value in tight loops
/// - `Ord` for sorted siblings lists and binary search
/// - `Display + FromStr` for the text codec
/// - `Send + Sync` so the filtration index can be sorted in parallel
///
/// The largest representable value is reserved as the null vertex; it labels
/// the parent of the root siblings list and must never be inserted.
pub trait VertexLike: Copy + Eq + Hash + Ord + Debug + Display + FromStr + Send + Sync {
    /// Sentinel used where no vertex exists.
    fn null_vertex() -> Self;
}

impl<T> VertexLike for T
where
    T: PrimInt + Hash + Debug + Display + FromStr + Send + Sync,
{
    #[inline]
    fn null_vertex() -> Self {
        T::max_value()
    }
}

/// Bound set for filtration values.
///
/// Filtration values are opaque to the tree: it only needs a total order,
/// a default (minimal) value and text conversions.
pub trait FiltrationLike:
    Copy + PartialOrd + Default + Debug + Display + FromStr + Send + Sync
{
    /// Total order used for every comparison the tree performs.
    fn cmp_filtration(&self, other: &Self) -> Ordering;

    #[inline]
    fn min_filtration(self, other: Self) -> Self {
        match self.cmp_filtration(&other) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    #[inline]
    fn max_filtration(self, other: Self) -> Self {
        match self.cmp_filtration(&other) {
            Ordering::Less => other,
            _ => self,
        }
    }
}

macro_rules! impl_filtration_float {
    ($($t:ty),*) => {$(
        impl FiltrationLike for $t {
            #[inline]
            fn cmp_filtration(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

macro_rules! impl_filtration_int {
    ($($t:ty),*) => {$(
        impl FiltrationLike for $t {
            #[inline]
            fn cmp_filtration(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_filtration_float!(f32, f64);
impl_filtration_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Minimal bound for per-node payloads (e.g. a persistence key).
pub trait PayloadLike: Clone + Default + Debug {}
impl<T: Clone + Default + Debug> PayloadLike for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_vertex_is_max() {
        assert_eq!(<u32 as VertexLike>::null_vertex(), u32::MAX);
        assert_eq!(<i64 as VertexLike>::null_vertex(), i64::MAX);
    }

    #[test]
    fn float_filtration_is_total() {
        assert_eq!(0.1f64.cmp_filtration(&0.2), Ordering::Less);
        assert_eq!(f64::NAN.cmp_filtration(&f64::INFINITY), Ordering::Greater);
        assert_eq!(0.3f64.min_filtration(0.2), 0.2);
        assert_eq!(0.3f64.max_filtration(0.2), 0.3);
    }
}
