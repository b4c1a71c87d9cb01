//! Macros for defining units, conversions and family tables.

/// Generates `From` trait implementations for all pairs of units within a family.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Declares the canonical `static` [`UnitFactorTable`](crate::UnitFactorTable) of a family from its unit types.
///
/// Factors are read from each unit's [`Unit::RATIO`](crate::Unit::RATIO), so a factor is written exactly once.
#[macro_export]
macro_rules! unit_table {
    ($(#[$meta:meta])* $vis:vis static $name:ident, base = $base:ty, [$($unit:ty),+ $(,)?]) => {
        $(#[$meta])*
        $vis static $name: $crate::UnitFactorTable = {
            const ENTRIES: &[$crate::UnitEntry] = &[$($crate::UnitEntry::of::<$unit>()),+];
            $crate::UnitFactorTable::from_static(<$base as $crate::Unit>::SYMBOL, ENTRIES)
        };
    };
}
