//! Scalar extraction helpers for Arrow record batches
//!
//! Typed per-row access used when reading treatment flags and score cells,
//! with one downcast arm per supported data type.

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int8Array, Int16Array, Int32Array,
    Int64Array, UInt8Array,
};
use arrow::datatypes::DataType;

/// Data types accepted for a treatment indicator column
pub const TREATMENT_TYPES: &[DataType] = &[
    DataType::Boolean,
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::UInt8,
];

/// Read a treatment indicator cell as an integer
///
/// Returns `None` for nulls and unsupported types. The caller decides which
/// values are legal; this only widens the supported indicator types to
/// `i64`.
#[must_use]
pub fn arrow_array_to_flag(array: &ArrayRef, index: usize) -> Option<i64> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Boolean => {
            let bool_array = array.as_any().downcast_ref::<BooleanArray>().unwrap();
            Some(i64::from(bool_array.value(index)))
        }
        DataType::Int8 => {
            let int_array = array.as_any().downcast_ref::<Int8Array>().unwrap();
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int16 => {
            let int_array = array.as_any().downcast_ref::<Int16Array>().unwrap();
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int32 => {
            let int_array = array.as_any().downcast_ref::<Int32Array>().unwrap();
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int64 => {
            let int_array = array.as_any().downcast_ref::<Int64Array>().unwrap();
            Some(int_array.value(index))
        }
        DataType::UInt8 => {
            let int_array = array.as_any().downcast_ref::<UInt8Array>().unwrap();
            Some(i64::from(int_array.value(index)))
        }
        _ => None,
    }
}

/// Read a score cell as `f64`
///
/// Returns `None` for nulls and unsupported types.
#[must_use]
pub fn arrow_array_to_f64(array: &ArrayRef, index: usize) -> Option<f64> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Float64 => {
            let float_array = array.as_any().downcast_ref::<Float64Array>().unwrap();
            Some(float_array.value(index))
        }
        DataType::Float32 => {
            let float_array = array.as_any().downcast_ref::<Float32Array>().unwrap();
            Some(f64::from(float_array.value(index)))
        }
        _ => None,
    }
}
