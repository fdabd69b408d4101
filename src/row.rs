//! Fixed-arity typed rows.
//!
//! A row type is a tuple whose elements all implement [`FromField`]. The
//! tuple's length is the row's arity; [`Row::from_fields`] converts the
//! fields left to right and stops at the first failure.

use crate::convert::FromField;
use crate::error::{CsvError, Result};

/// A tuple of column types that can be built from one line's fields.
///
/// Implemented for tuples of 1 to 12 elements.
pub trait Row: Sized {
    /// Number of columns.
    const ARITY: usize;

    /// Convert `fields` into a row.
    ///
    /// `line` is the 1-based source line, used only for error reporting.
    ///
    /// # Errors
    /// [`CsvError::RowArity`] if `fields.len() != ARITY`, otherwise
    /// [`CsvError::Conversion`] for the first field that fails to convert.
    fn from_fields<S: AsRef<str>>(fields: &[S], line: u64) -> Result<Self>;
}

fn convert_at<T: FromField, S: AsRef<str>>(fields: &[S], column: usize, line: u64) -> Result<T> {
    let value = fields[column].as_ref();
    T::from_field(value).map_err(|reason| CsvError::Conversion {
        line,
        column,
        value: value.to_owned(),
        type_name: T::TYPE_NAME,
        reason,
    })
}

macro_rules! impl_row_for_tuple {
    ($n:expr; $($t:ident => $idx:tt),+) => {
        impl<$($t: FromField),+> Row for ($($t,)+) {
            const ARITY: usize = $n;

            fn from_fields<S: AsRef<str>>(fields: &[S], line: u64) -> Result<Self> {
                if fields.len() != Self::ARITY {
                    return Err(CsvError::RowArity {
                        line,
                        expected: Self::ARITY,
                        found: fields.len(),
                    });
                }
                Ok(($(convert_at::<$t, S>(fields, $idx, line)?,)+))
            }
        }
    };
}

impl_row_for_tuple!(1; A => 0);
impl_row_for_tuple!(2; A => 0, B => 1);
impl_row_for_tuple!(3; A => 0, B => 1, C => 2);
impl_row_for_tuple!(4; A => 0, B => 1, C => 2, D => 3);
impl_row_for_tuple!(5; A => 0, B => 1, C => 2, D => 3, E => 4);
impl_row_for_tuple!(6; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_row_for_tuple!(7; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_row_for_tuple!(8; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
impl_row_for_tuple!(9; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
impl_row_for_tuple!(10; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);
impl_row_for_tuple!(11; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10);
impl_row_for_tuple!(12; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10, L => 11);
