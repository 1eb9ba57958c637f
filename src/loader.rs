use crate::error::LoadError;
use crate::types::{Column, Dataset, ProfileRecord, RawRow};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub total_rows: usize,
    pub columns: Vec<Column>,
    pub ignored_columns: Vec<String>,
    /// Rows carrying more fields than the header; the extra fields are dropped.
    pub overlong_rows: usize,
    pub undated_graduations: usize,
    pub undated_job_starts: usize,
}

/// Read the CSV at `path` into a [`Dataset`].
///
/// A missing file or a malformed CSV is fatal; absent optional columns are
/// not (the views that need them fall back to placeholders later).
pub fn load(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loading dataset from {}", path.display());
    read_dataset(file)
}

/// Same as [`load`], from any reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<(Dataset, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    // A recognized header that repeats keeps its first position; later
    // copies are ignored like any unrecognized column.
    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<Column, usize> = HashMap::new();
    let mut ignored_columns: Vec<String> = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        match Column::from_header(h) {
            Some(c) if !index.contains_key(&c) => {
                index.insert(c, i);
                columns.push(c);
            }
            Some(c) => {
                debug!("Duplicate column {} at position {}", c.header(), i);
                ignored_columns.push(h.to_string());
            }
            None => ignored_columns.push(h.to_string()),
        }
    }
    for c in Column::SOURCE {
        if !columns.contains(&c) {
            warn!("Column {} not found in input", c.header());
        }
    }
    if !ignored_columns.is_empty() {
        debug!("Ignoring {} unrecognized columns", ignored_columns.len());
    }

    let mut records: Vec<ProfileRecord> = Vec::new();
    let mut overlong_rows = 0usize;
    for result in rdr.records() {
        let record = result?;
        if record.len() > headers.len() {
            overlong_rows += 1;
            debug!(
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                expected = headers.len(),
                "Dropping extra fields"
            );
        }
        records.push(ProfileRecord::from(raw_row(&record, &index)));
    }
    if overlong_rows > 0 {
        warn!("{} rows had more fields than the header", overlong_rows);
    }

    let mut dataset = Dataset::new(columns.iter().copied(), records);
    let (undated_graduations, undated_job_starts) = dataset.derive_years();
    if undated_graduations > 0 || undated_job_starts > 0 {
        debug!(
            undated_graduations,
            undated_job_starts, "Rows without a usable history date"
        );
    }

    let report = LoadReport {
        total_rows: dataset.len(),
        columns,
        ignored_columns,
        overlong_rows,
        undated_graduations,
        undated_job_starts,
    };
    info!(
        rows = report.total_rows,
        columns = report.columns.len(),
        "Dataset loaded"
    );
    Ok((dataset, report))
}

/// Pick the recognized cells out of one record. Short rows read the missing
/// trailing cells as absent.
fn raw_row(record: &StringRecord, index: &HashMap<Column, usize>) -> RawRow {
    let cell = |c: Column| {
        index
            .get(&c)
            .and_then(|i| record.get(*i))
            .map(str::to_string)
    };
    RawRow {
        location_country: cell(Column::LocationCountry),
        education_type: cell(Column::EducationType),
        education_end_date: cell(Column::EducationEndDate),
        job_type: cell(Column::JobType),
        job_start_date: cell(Column::JobStartDate),
        exit_type: cell(Column::ExitType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,location_country,history[0].type,history[0].end_date,exit_type
1,USA,Bachelor,2020-01-01,work
2,usa ,,bad-date,study
3, Canada,Master,,
";

    #[test]
    fn reads_recognized_columns_and_ignores_the_rest() {
        let (ds, report) = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.ignored_columns, vec!["id".to_string()]);
        assert!(ds.has(Column::EducationType));
        assert!(ds.has(Column::ExitType));
        assert!(!ds.has(Column::JobType));
        assert!(ds.has(Column::GraduationYear));
        assert!(!ds.has(Column::JobStartYear));
    }

    #[test]
    fn normalizes_destination_and_keeps_other_columns_raw() {
        let (ds, _) = read_dataset(SAMPLE.as_bytes()).unwrap();
        let countries: Vec<&str> = ds
            .records
            .iter()
            .map(|r| r.location_country.as_str())
            .collect();
        assert_eq!(countries, vec!["usa", "usa", "canada"]);
        assert_eq!(ds.records[0].education_type.as_deref(), Some("Bachelor"));
        assert_eq!(ds.records[1].education_type, None);
        assert_eq!(ds.records[2].exit_type, None);
    }

    #[test]
    fn unparseable_dates_stay_in_the_table() {
        let (ds, report) = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(report.undated_graduations, 2);
        assert_eq!(ds.records[0].graduation_year, Some(2020));
        assert_eq!(ds.records[1].graduation_year, None);
    }

    #[test]
    fn short_rows_read_as_missing_values() {
        let csv = "location_country,exit_type\nGermany\n";
        let (ds, _) = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].location_country, "germany");
        assert_eq!(ds.records[0].exit_type, None);
    }

    #[test]
    fn missing_destination_column_reads_as_empty() {
        let csv = "exit_type\nwork\n";
        let (ds, _) = read_dataset(csv.as_bytes()).unwrap();
        assert!(!ds.has(Column::LocationCountry));
        assert_eq!(ds.records[0].location_country, "");
    }

    #[test]
    fn repeated_header_keeps_the_first_column() {
        let csv = "exit_type,location_country,exit_type\nwork,Iran,study\n";
        let (ds, report) = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.has(Column::ExitType));
        assert_eq!(ds.records[0].exit_type.as_deref(), Some("work"));
        assert_eq!(ds.records[0].location_country, "iran");
        assert_eq!(report.ignored_columns, vec!["exit_type".to_string()]);
    }

    #[test]
    fn extra_fields_are_dropped_and_counted() {
        let csv = "location_country,exit_type\nUSA,work,extra\nCanada,study\n";
        let (ds, report) = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(report.overlong_rows, 1);
        assert_eq!(ds.records[0].location_country, "usa");
        assert_eq!(ds.records[0].exit_type.as_deref(), Some("work"));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = read_dataset("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let bytes: &[u8] = b"location_country\n\xff\xfe\n";
        let err = read_dataset(bytes).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
