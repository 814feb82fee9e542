// std::convert::From

/// Stamps `From<integer>` conversions for `CodeValue` so the resolver
/// accepts the common integer widths through one generic parameter
/// instead of a pile of hand-written impl blocks.
macro_rules! impl_code_value_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl<'a> From<$int> for crate::phones::CodeValue<'a> {
                fn from(value: $int) -> Self {
                    Self::Number(i64::from(value))
                }
            }
        )*
    };
}

pub(crate) use impl_code_value_from_int;
