use crate::util::{clean_cell, normalize_destination, parse_year};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tabled::Tabled;

/// Columns the dashboard understands. The last two are derived from the
/// history dates after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    LocationCountry,
    EducationType,
    EducationEndDate,
    JobType,
    JobStartDate,
    ExitType,
    GraduationYear,
    JobStartYear,
}

impl Column {
    /// Columns that can appear in the input header.
    pub const SOURCE: [Column; 6] = [
        Column::LocationCountry,
        Column::EducationType,
        Column::EducationEndDate,
        Column::JobType,
        Column::JobStartDate,
        Column::ExitType,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::LocationCountry => "location_country",
            Column::EducationType => "history[0].type",
            Column::EducationEndDate => "history[0].end_date",
            Column::JobType => "history[1].type",
            Column::JobStartDate => "history[1].start_date",
            Column::ExitType => "exit_type",
            Column::GraduationYear => "graduation_year",
            Column::JobStartYear => "job_start_year",
        }
    }

    /// Look up a recognized input column by its exact header name.
    pub fn from_header(name: &str) -> Option<Column> {
        COLUMN_INDEX.get(name).copied()
    }
}

static COLUMN_INDEX: Lazy<HashMap<&'static str, Column>> =
    Lazy::new(|| Column::SOURCE.iter().map(|c| (c.header(), *c)).collect());

/// The recognized cells of one input row, before cleaning.
#[derive(Debug, Default)]
pub struct RawRow {
    pub location_country: Option<String>,
    pub education_type: Option<String>,
    pub education_end_date: Option<String>,
    pub job_type: Option<String>,
    pub job_start_date: Option<String>,
    pub exit_type: Option<String>,
}

/// One professional's profile after loading. `location_country` is already
/// normalized; the two year fields are filled by [`Dataset::derive_years`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    pub location_country: String,
    pub education_type: Option<String>,
    pub education_end_date: Option<String>,
    pub job_type: Option<String>,
    pub job_start_date: Option<String>,
    pub exit_type: Option<String>,
    pub graduation_year: Option<i32>,
    pub job_start_year: Option<i32>,
}

impl From<RawRow> for ProfileRecord {
    fn from(row: RawRow) -> Self {
        let location_country = clean_cell(row.location_country);
        ProfileRecord {
            location_country: normalize_destination(location_country.as_deref()),
            education_type: clean_cell(row.education_type),
            education_end_date: clean_cell(row.education_end_date),
            job_type: clean_cell(row.job_type),
            job_start_date: clean_cell(row.job_start_date),
            exit_type: clean_cell(row.exit_type),
            graduation_year: None,
            job_start_year: None,
        }
    }
}

/// The loaded table: rows plus the set of columns the header carried.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: BTreeSet<Column>,
    pub records: Vec<ProfileRecord>,
}

impl Dataset {
    pub fn new(columns: impl IntoIterator<Item = Column>, records: Vec<ProfileRecord>) -> Self {
        Dataset {
            columns: columns.into_iter().collect(),
            records,
        }
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn has_all(&self, columns: &[Column]) -> bool {
        columns.iter().all(|c| self.has(*c))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add `graduation_year` and `job_start_year` in place when their source
    /// date columns exist. Returns the number of rows whose date did not
    /// parse for each derived column.
    pub fn derive_years(&mut self) -> (usize, usize) {
        let mut undated = (0usize, 0usize);
        if self.has(Column::EducationEndDate) {
            for r in &mut self.records {
                r.graduation_year = parse_year(r.education_end_date.as_deref());
                if r.graduation_year.is_none() {
                    undated.0 += 1;
                }
            }
            self.columns.insert(Column::GraduationYear);
        }
        if self.has(Column::JobStartDate) {
            for r in &mut self.records {
                r.job_start_year = parse_year(r.job_start_date.as_deref());
                if r.job_start_year.is_none() {
                    undated.1 += 1;
                }
            }
            self.columns.insert(Column::JobStartYear);
        }
        undated
    }
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct FrequencyRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct ProportionRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Share", display_with = "display_share")]
    pub share: f64,
}

fn display_share(share: &f64) -> String {
    crate::util::format_percent(*share)
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct TimeSeriesRow {
    #[tabled(rename = "Year")]
    pub period: i32,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct ObservationRow {
    #[tabled(rename = "Year")]
    pub year: i32,
    #[tabled(rename = "Label")]
    pub label: String,
}

/// Contingency matrix: `counts[i][j]` is the number of rows with
/// `rows[i]` in the first column and `columns[j]` in the second.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CrossTab {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// The 1x1 zero matrix shown when either source column is missing.
    pub fn zero() -> Self {
        CrossTab {
            rows: vec![String::new()],
            columns: vec![String::new()],
            counts: vec![vec![0]],
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_profiles: usize,
    pub top_destination: String,
    pub distinct_destinations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_only_knows_source_columns() {
        assert_eq!(Column::from_header("history[1].type"), Some(Column::JobType));
        assert_eq!(Column::from_header("exit_type"), Some(Column::ExitType));
        assert_eq!(Column::from_header("graduation_year"), None);
        assert_eq!(Column::from_header("Exit_Type"), None);
    }

    #[test]
    fn derived_years_follow_their_source_columns() {
        let records = vec![
            ProfileRecord {
                education_end_date: Some("2020-01-01".into()),
                job_start_date: Some("nope".into()),
                ..Default::default()
            },
            ProfileRecord {
                education_end_date: Some("bad-date".into()),
                ..Default::default()
            },
        ];
        let mut ds = Dataset::new([Column::EducationEndDate], records);
        let undated = ds.derive_years();

        assert_eq!(undated, (1, 0));
        assert!(ds.has(Column::GraduationYear));
        assert!(!ds.has(Column::JobStartYear));
        assert_eq!(ds.records[0].graduation_year, Some(2020));
        assert_eq!(ds.records[1].graduation_year, None);
        assert_eq!(ds.records[0].job_start_year, None);
    }

    #[test]
    fn crosstab_zero_placeholder_sums_to_zero() {
        let z = CrossTab::zero();
        assert_eq!(z.counts, vec![vec![0]]);
        assert_eq!(z.total(), 0);
    }
}
