//! Shared fixtures for integration tests

use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Treatment indicator column used by the test batches
pub const TREATMENT: &str = "TREATED";

/// Initialize test logging once per binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Batch with a treatment indicator and a per-row string payload
///
/// Row `i` carries the label `unit-i`, so row identity stays visible after
/// filtering and concatenation.
pub fn population_batch(flags: &[i32]) -> RecordBatch {
    let labels: Vec<String> = (0..flags.len()).map(|i| format!("unit-{i}")).collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new(TREATMENT, DataType::Int32, false),
        Field::new("LABEL", DataType::Utf8, false),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(flags.to_vec())),
        Arc::new(StringArray::from(labels)),
    ];

    RecordBatch::try_new(schema, columns).unwrap()
}

/// Like [`population_batch`], with an extra named Float64 score column
pub fn scored_batch(flags: &[i32], score_name: &str, scores: &[f64]) -> RecordBatch {
    let base = population_batch(flags);

    let mut fields: Vec<Field> = base
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    let mut columns = base.columns().to_vec();

    fields.push(Field::new(score_name, DataType::Float64, false));
    columns.push(Arc::new(Float64Array::from(scores.to_vec())) as ArrayRef);

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap()
}

/// Read a Utf8 column as owned strings
pub fn string_column(batch: &RecordBatch, name: &str) -> Vec<String> {
    let idx = batch.schema().index_of(name).unwrap();
    let array = batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();

    (0..array.len()).map(|i| array.value(i).to_string()).collect()
}

/// Read a Float64 column as a vector
pub fn f64_column(batch: &RecordBatch, name: &str) -> Vec<f64> {
    let idx = batch.schema().index_of(name).unwrap();
    let array = batch
        .column(idx)
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();

    array.values().to_vec()
}
