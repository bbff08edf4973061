use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use launch_dashboard::data::model::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN, SITE_COLUMN,
};
use launch_dashboard::{LaunchRecord, OutcomeClass};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster category, its typical payload ceiling and landing success rate.
/// Later categories are flown later in the sequence.
const ERAS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.0),
    ("v1.1", 4500.0, 0.2),
    ("FT", 9600.0, 0.7),
    ("B4", 7000.0, 0.6),
    ("B5", 15600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn generate(n: usize, rng: &mut SimpleRng) -> Vec<LaunchRecord> {
    (0..n)
        .map(|i| {
            let era = (i * ERAS.len() / n).min(ERAS.len() - 1);
            let (category, ceiling, success_rate) = ERAS[era];
            let site = if era == 0 { SITES[0] } else { rng.pick(&SITES) };
            let payload = (rng.next_f64() * ceiling).round();
            let outcome_class = if rng.next_f64() < success_rate {
                OutcomeClass::Success
            } else {
                OutcomeClass::Failure
            };

            let flight_number = u32::try_from(i + 1).unwrap_or(u32::MAX);
            LaunchRecord {
                flight_number: Some(flight_number),
                site: site.to_string(),
                payload_mass_kg: payload,
                outcome_class,
                booster_version: Some(format!("F9 {category} B{:04}", 1000 + i)),
                booster_version_category: category.to_string(),
            }
        })
        .collect()
}

/// Output files are never overwritten, so a real dataset next to the sample is safe.
fn create_new(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("creating {} (remove it first to regenerate)", path.display()))
}

fn write_csv(path: &Path, records: &[LaunchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(create_new(path)?);
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, records: &[LaunchRecord]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, true),
        Field::new(SITE_COLUMN, DataType::Utf8, false),
        Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
        Field::new(CLASS_COLUMN, DataType::Int64, false),
        Field::new("Booster Version", DataType::Utf8, true),
        Field::new(BOOSTER_CATEGORY_COLUMN, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(
                records
                    .iter()
                    .map(|r| r.flight_number.map(i64::from))
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.site.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.payload_mass_kg).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records
                    .iter()
                    .map(|r| i64::from(r.outcome_class))
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records
                    .iter()
                    .map(|r| r.booster_version.as_deref())
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records
                    .iter()
                    .map(|r| r.booster_version_category.as_str())
                    .collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = create_new(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let records = generate(56, &mut rng);

    let csv_path = Path::new("sample_launch_dash.csv");
    let parquet_path = Path::new("sample_launch_dash.parquet");
    write_csv(csv_path, &records)?;
    write_parquet(parquet_path, &records)?;

    println!(
        "Wrote {} launch records to {} and {}",
        records.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use launch_dashboard::data::loader::load_file;

    use super::*;

    #[test]
    fn existing_dataset_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        std::fs::write(&path, "keep me").unwrap();

        let records = generate(4, &mut SimpleRng::new(1));
        assert!(write_csv(&path, &records).is_err());
        assert!(write_parquet(&dir.path().join("launches.csv"), &records).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn generated_files_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let records = generate(12, &mut SimpleRng::new(7));

        let csv_path = dir.path().join("sample.csv");
        let parquet_path = dir.path().join("sample.parquet");
        write_csv(&csv_path, &records).unwrap();
        write_parquet(&parquet_path, &records).unwrap();

        assert_eq!(load_file(&csv_path).unwrap().records(), records.as_slice());
        assert_eq!(load_file(&parquet_path).unwrap().records(), records.as_slice());
    }
}
