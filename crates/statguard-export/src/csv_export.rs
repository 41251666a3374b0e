//! CSV encoding: one header row, one data row
//!
//! Array fields are flattened with `|`; an empty array is an empty cell. The
//! confidence interval becomes `lower|upper`.

use crate::{Error, Result};
use statguard_classical::ClassicalSummary;
use statguard_robust::{IntervalBounds, RobustSummary};

/// Separator of flattened array cells
pub const ARRAY_SEPARATOR: char = '|';

/// A record that exports as a single CSV row
pub trait CsvRecord {
    /// Column names, in output order
    fn csv_headers() -> &'static [&'static str];

    /// Cell values, aligned with [`CsvRecord::csv_headers`]
    fn csv_fields(&self) -> Vec<String>;
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(&ARRAY_SEPARATOR.to_string())
}

impl CsvRecord for RobustSummary {
    fn csv_headers() -> &'static [&'static str] {
        &[
            "mean",
            "median",
            "robustDeviation",
            "robustVariance",
            "robustCV",
            "IQR",
            "MAD",
            "outliers",
            "confidenceInterval",
            "count",
        ]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.mean.to_string(),
            self.median.to_string(),
            self.robust_deviation.to_string(),
            self.robust_variance.to_string(),
            self.robust_cv.to_string(),
            self.iqr.to_string(),
            self.mad.to_string(),
            join(&self.outliers),
            join(&[self.confidence_interval.lower, self.confidence_interval.upper]),
            self.count.to_string(),
        ]
    }
}

impl CsvRecord for ClassicalSummary {
    fn csv_headers() -> &'static [&'static str] {
        &[
            "mean",
            "median",
            "standardDeviation",
            "sampleVariance",
            "CV",
            "zScoreOutliers",
            "count",
        ]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.mean.to_string(),
            self.median.to_string(),
            self.standard_deviation.to_string(),
            self.sample_variance.to_string(),
            self.cv.to_string(),
            join(&self.z_score_outliers),
            self.count.to_string(),
        ]
    }
}

fn check_delimiter(delimiter: u8) -> Result<()> {
    match delimiter {
        b'|' | b'"' | b'\n' | b'\r' => Err(Error::format(format!(
            "delimiter {:?} collides with the CSV layout",
            delimiter as char
        ))),
        _ => Ok(()),
    }
}

/// Header row plus one data row, separated by `delimiter`
pub fn to_csv<R: CsvRecord>(record: &R, delimiter: u8) -> Result<String> {
    check_delimiter(delimiter)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(R::csv_headers())?;
    writer.write_record(record.csv_fields())?;
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::format(e.to_string()))
}

fn parse_number(column: &str, cell: &str) -> Result<f64> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| Error::format(format!("column {column}: '{cell}' is not a number")))
}

fn parse_array(column: &str, cell: &str) -> Result<Vec<f64>> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    cell.split(ARRAY_SEPARATOR)
        .map(|part| parse_number(column, part))
        .collect()
}

fn column<'r>(headers: &csv::StringRecord, record: &'r csv::StringRecord, name: &str) -> Result<&'r str> {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|index| record.get(index))
        .ok_or_else(|| Error::format(format!("missing column {name}")))
}

/// Decode the output of [`to_csv`] for a [`RobustSummary`]
pub fn robust_summary_from_csv(text: &str, delimiter: u8) -> Result<RobustSummary> {
    check_delimiter(delimiter)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let record = reader
        .records()
        .next()
        .ok_or_else(|| Error::format("missing data row"))??;

    let cell = |name: &str| column(&headers, &record, name);

    let interval = parse_array("confidenceInterval", cell("confidenceInterval")?)?;
    let [lower, upper] = interval[..] else {
        return Err(Error::format(format!(
            "confidenceInterval must hold two values, got {}",
            interval.len()
        )));
    };
    let count = cell("count")?
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::format("column count is not a non-negative integer"))?;

    Ok(RobustSummary {
        mean: parse_number("mean", cell("mean")?)?,
        median: parse_number("median", cell("median")?)?,
        robust_deviation: parse_number("robustDeviation", cell("robustDeviation")?)?,
        robust_variance: parse_number("robustVariance", cell("robustVariance")?)?,
        robust_cv: parse_number("robustCV", cell("robustCV")?)?,
        iqr: parse_number("IQR", cell("IQR")?)?,
        mad: parse_number("MAD", cell("MAD")?)?,
        outliers: parse_array("outliers", cell("outliers")?)?,
        confidence_interval: IntervalBounds { lower, upper },
        count,
    })
}
