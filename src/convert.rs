//! Converting a raw field to a column type.
//!
//! [`FromField`] is implemented for `String`, every primitive integer, `f32`,
//! `f64`, `bool`, `char`, and `Option<T>` of any of those.
//!
//! Numeric conversions consume the whole field. Nothing is trimmed, so
//! `" 42"`, `"42 "` and `"42x"` are all rejected, as are empty fields and
//! values outside the target type's range. For floats that includes values
//! too small to represent: `"1e-400"` is an error, not `0.0`.

use crate::error::FieldError;

/// A type a single CSV field can be converted into.
pub trait FromField: Sized {
    /// Name used in conversion error messages.
    const TYPE_NAME: &'static str;

    /// Convert the raw field text.
    ///
    /// # Errors
    /// Returns a [`FieldError`] describing why `field` is not a valid value.
    fn from_field(field: &str) -> Result<Self, FieldError>;
}

impl FromField for String {
    const TYPE_NAME: &'static str = "String";

    fn from_field(field: &str) -> Result<Self, FieldError> {
        Ok(field.to_owned())
    }
}

macro_rules! impl_from_field_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromField for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_field(field: &str) -> Result<Self, FieldError> {
                    field.parse::<$t>().map_err(|e| FieldError::new(e.to_string()))
                }
            }
        )*
    };
}

impl_from_field_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_field_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromField for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_field(field: &str) -> Result<Self, FieldError> {
                    // `str::parse` also accepts "inf"/"NaN"; only decimal text is valid here.
                    if !field.bytes().any(|b| b.is_ascii_digit()) {
                        return Err(FieldError::new("not a decimal number"));
                    }
                    let v = field.parse::<$t>().map_err(|e| FieldError::new(e.to_string()))?;
                    if v.is_infinite() || (v == 0.0 && has_nonzero_mantissa(field)) {
                        return Err(FieldError::new("number out of range"));
                    }
                    Ok(v)
                }
            }
        )*
    };
}

impl_from_field_float!(f32, f64);

/// Whether the digits before any exponent include a non-zero one.
fn has_nonzero_mantissa(field: &str) -> bool {
    field
        .split(['e', 'E'])
        .next()
        .is_some_and(|m| m.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

impl FromField for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_field(field: &str) -> Result<Self, FieldError> {
        field.parse::<bool>().map_err(|e| FieldError::new(e.to_string()))
    }
}

impl FromField for char {
    const TYPE_NAME: &'static str = "char";

    fn from_field(field: &str) -> Result<Self, FieldError> {
        field.parse::<char>().map_err(|e| FieldError::new(e.to_string()))
    }
}

/// An empty field is `None`; anything else must convert as `T`.
impl<T: FromField> FromField for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn from_field(field: &str) -> Result<Self, FieldError> {
        if field.is_empty() {
            Ok(None)
        } else {
            T::from_field(field).map(Some)
        }
    }
}
