use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, LaunchRecord, LaunchTable, OutcomeClass,
    PAYLOAD_COLUMN, SITE_COLUMN,
};
use crate::error::TableError;

const REQUIRED_COLUMNS: [&str; 4] = [
    SITE_COLUMN,
    PAYLOAD_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – the launch dataset export, one launch per row
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – the same columns as typed Parquet columns
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let table = LaunchTable::from_records(records)
        .with_context(|| format!("validating {}", path.display()))?;
    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
        table.len(),
        path.display(),
        table.sites().len(),
        table.min_payload(),
        table.max_payload()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Columns the dashboard does not read are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(TableError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.context("reading CSV record")?;
        // 1-based file line; the header is line 1.
        let line = row.position().map_or(0, |p| p.line());
        let record: LaunchRecord = row
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV line {line}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` layout.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON launch records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launch records from a Parquet file.
///
/// Numeric columns may be stored as any integer or float width; they are cast
/// to `Float64` (payload) and `Int64` (class) before reading.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let sites = typed_column(batch, SITE_COLUMN, &DataType::Utf8)?;
    let payloads = typed_column(batch, PAYLOAD_COLUMN, &DataType::Float64)?;
    let classes = typed_column(batch, CLASS_COLUMN, &DataType::Int64)?;
    let categories = typed_column(batch, BOOSTER_CATEGORY_COLUMN, &DataType::Utf8)?;

    let sites = downcast::<StringArray>(&sites, SITE_COLUMN)?;
    let payloads = downcast::<Float64Array>(&payloads, PAYLOAD_COLUMN)?;
    let classes = downcast::<Int64Array>(&classes, CLASS_COLUMN)?;
    let categories = downcast::<StringArray>(&categories, BOOSTER_CATEGORY_COLUMN)?;

    let flight_numbers = optional_column(batch, "Flight Number", &DataType::Int64)?;
    let flight_numbers = flight_numbers
        .as_ref()
        .map(|c| downcast::<Int64Array>(c, "Flight Number"))
        .transpose()?;
    let versions = optional_column(batch, "Booster Version", &DataType::Utf8)?;
    let versions = versions
        .as_ref()
        .map(|c| downcast::<StringArray>(c, "Booster Version"))
        .transpose()?;

    for row in 0..batch.num_rows() {
        if sites.is_null(row) || payloads.is_null(row) || classes.is_null(row) {
            bail!("Row {row}: null in a required column");
        }
        let outcome_class = OutcomeClass::try_from(classes.value(row))
            .with_context(|| format!("Row {row}"))?;

        let flight_number = match flight_numbers {
            Some(c) if !c.is_null(row) => {
                let value = c.value(row);
                let number = u32::try_from(value)
                    .with_context(|| format!("Row {row}: flight number {value} out of range"))?;
                Some(number)
            }
            _ => None,
        };

        out.push(LaunchRecord {
            flight_number,
            site: sites.value(row).to_string(),
            payload_mass_kg: payloads.value(row),
            outcome_class,
            booster_version: versions
                .filter(|c| !c.is_null(row))
                .map(|c| c.value(row).to_string()),
            booster_version_category: if categories.is_null(row) {
                String::new()
            } else {
                categories.value(row).to_string()
            },
        });
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

/// Fetch a required column and cast it to the type the reader expects.
fn typed_column(batch: &RecordBatch, name: &'static str, to: &DataType) -> Result<ArrayRef> {
    optional_column(batch, name, to)?.ok_or_else(|| TableError::MissingColumn(name).into())
}

fn optional_column(batch: &RecordBatch, name: &str, to: &DataType) -> Result<Option<ArrayRef>> {
    let Some(col) = batch.column_by_name(name) else {
        return Ok(None);
    };
    let casted = cast(col.as_ref(), to).with_context(|| {
        format!("column '{name}' has type {:?}, expected {to:?}", col.data_type())
    })?;
    Ok(Some(casted))
}

fn downcast<'a, T: 'static>(col: &'a ArrayRef, name: &str) -> Result<&'a T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("column '{name}' could not be read after casting"))
}
