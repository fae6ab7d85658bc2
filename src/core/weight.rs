use std::ops::{Add, Sub};

/// Numeric type usable as an edge cost or an activity duration.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Sub<Self, Output = Self> + Clone + Sized {
    fn zero() -> Self;

    fn is_unsigned() -> bool;

    /// Sum of the two values, `None` if it does not fit into the type.
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }

            // Floats saturate to infinity.
            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(*self + *other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add() {
        assert_eq!(Weight::checked_add(&2i32, &3), Some(5));
        assert_eq!(Weight::checked_add(&i32::MAX, &1), None);
        assert_eq!(Weight::checked_add(&i8::MIN, &-1), None);
        assert_eq!(Weight::checked_add(&f64::MAX, &f64::MAX), Some(f64::INFINITY));
        assert!(u32::is_unsigned());
        assert!(!f32::is_unsigned());
    }
}
