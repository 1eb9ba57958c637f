use crate::types::{
    Column, CrossTab, Dataset, FrequencyRow, ObservationRow, ProportionRow, TimeSeriesRow,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

/// The eight aggregate views the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    EducationPopularity,
    EducationTimeline,
    JobPopularity,
    JobTimeline,
    EducationJobCrosstab,
    DestinationDistribution,
    ExitTypeRatio,
    JobStartVsExit,
}

impl ViewKind {
    pub const ALL: [ViewKind; 8] = [
        ViewKind::EducationPopularity,
        ViewKind::EducationTimeline,
        ViewKind::JobPopularity,
        ViewKind::JobTimeline,
        ViewKind::EducationJobCrosstab,
        ViewKind::DestinationDistribution,
        ViewKind::ExitTypeRatio,
        ViewKind::JobStartVsExit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::EducationPopularity => "education_popularity",
            ViewKind::EducationTimeline => "education_timeline",
            ViewKind::JobPopularity => "job_popularity",
            ViewKind::JobTimeline => "job_timeline",
            ViewKind::EducationJobCrosstab => "education_job_crosstab",
            ViewKind::DestinationDistribution => "destination_distribution",
            ViewKind::ExitTypeRatio => "exit_type_ratio",
            ViewKind::JobStartVsExit => "job_start_vs_exit",
        }
    }

    pub fn chart(self) -> ChartKind {
        match self {
            ViewKind::EducationPopularity
            | ViewKind::JobPopularity
            | ViewKind::DestinationDistribution => ChartKind::Bar,
            ViewKind::EducationTimeline | ViewKind::JobTimeline => ChartKind::Line,
            ViewKind::EducationJobCrosstab => ChartKind::Heatmap,
            ViewKind::ExitTypeRatio => ChartKind::Pie,
            ViewKind::JobStartVsExit => ChartKind::Strip,
        }
    }

    /// Empty result of the right shape for this view.
    pub fn placeholder(self) -> ViewData {
        match self {
            ViewKind::EducationPopularity
            | ViewKind::JobPopularity
            | ViewKind::DestinationDistribution => ViewData::Frequency(Vec::new()),
            ViewKind::EducationTimeline | ViewKind::JobTimeline => {
                ViewData::TimeSeries(Vec::new())
            }
            ViewKind::EducationJobCrosstab => ViewData::Crosstab(CrossTab::zero()),
            ViewKind::ExitTypeRatio => ViewData::Proportions(Vec::new()),
            ViewKind::JobStartVsExit => ViewData::Observations(Vec::new()),
        }
    }
}

/// Widget hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Heatmap,
    Pie,
    Strip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Computed,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "rows", rename_all = "snake_case")]
pub enum ViewData {
    Frequency(Vec<FrequencyRow>),
    Proportions(Vec<ProportionRow>),
    TimeSeries(Vec<TimeSeriesRow>),
    Crosstab(CrossTab),
    Observations(Vec<ObservationRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateView {
    pub kind: ViewKind,
    pub status: ViewStatus,
    pub data: ViewData,
}

impl AggregateView {
    pub fn placeholder(kind: ViewKind) -> Self {
        AggregateView {
            kind,
            status: ViewStatus::Placeholder,
            data: kind.placeholder(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.status == ViewStatus::Placeholder
    }
}

/// All computed views, keyed by kind.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AggregateViews(BTreeMap<ViewKind, AggregateView>);

impl AggregateViews {
    pub fn get(&self, kind: ViewKind) -> Option<&AggregateView> {
        self.0.get(&kind)
    }

    /// A kind that was never computed counts as a placeholder.
    pub fn is_placeholder(&self, kind: ViewKind) -> bool {
        self.get(kind).map_or(true, AggregateView::is_placeholder)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregateView> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

type ComputeFn = fn(&Dataset, &str) -> ViewData;

struct ViewSpec {
    kind: ViewKind,
    required: &'static [Column],
    compute: ComputeFn,
}

const VIEW_SPECS: [ViewSpec; 8] = [
    ViewSpec {
        kind: ViewKind::EducationPopularity,
        required: &[Column::EducationType],
        compute: education_popularity,
    },
    ViewSpec {
        kind: ViewKind::EducationTimeline,
        required: &[Column::EducationType, Column::EducationEndDate],
        compute: education_timeline,
    },
    ViewSpec {
        kind: ViewKind::JobPopularity,
        required: &[Column::JobType],
        compute: job_popularity,
    },
    ViewSpec {
        kind: ViewKind::JobTimeline,
        required: &[Column::JobType, Column::JobStartDate],
        compute: job_timeline,
    },
    ViewSpec {
        kind: ViewKind::EducationJobCrosstab,
        required: &[Column::EducationType, Column::JobType],
        compute: education_job_crosstab,
    },
    ViewSpec {
        kind: ViewKind::DestinationDistribution,
        required: &[],
        compute: destination_distribution,
    },
    ViewSpec {
        kind: ViewKind::ExitTypeRatio,
        required: &[Column::ExitType],
        compute: exit_type_ratio,
    },
    ViewSpec {
        kind: ViewKind::JobStartVsExit,
        required: &[Column::JobStartYear, Column::ExitType],
        compute: job_start_vs_exit,
    },
];

/// Compute every view. `unknown` is the label substituted for missing
/// categorical values.
pub fn compute_views(data: &Dataset, unknown: &str) -> AggregateViews {
    let mut views = BTreeMap::new();
    for spec in &VIEW_SPECS {
        let view = if data.has_all(spec.required) {
            let data = (spec.compute)(data, unknown);
            debug!(view = spec.kind.name(), "View computed");
            AggregateView {
                kind: spec.kind,
                status: ViewStatus::Computed,
                data,
            }
        } else {
            let missing: Vec<&str> = spec
                .required
                .iter()
                .filter(|c| !data.has(**c))
                .map(|c| c.header())
                .collect();
            warn!(
                "View {} falls back to placeholder; missing columns: {}",
                spec.kind.name(),
                missing.join(", ")
            );
            AggregateView::placeholder(spec.kind)
        };
        views.insert(spec.kind, view);
    }
    AggregateViews(views)
}

/// Count occurrences of each label, most frequent first. Labels with equal
/// counts keep the order in which they first appeared.
pub fn value_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<FrequencyRow> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut rows: Vec<FrequencyRow> = Vec::new();
    for label in labels {
        match index.get(label).copied() {
            Some(i) => rows[i].count += 1,
            None => {
                index.insert(label, rows.len());
                rows.push(FrequencyRow {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    // `sort_by` is stable, so ties stay in first-appearance order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Count rows per (year, label), dropping rows where either is missing.
/// Output is ordered by year, then label.
pub fn grouped_counts<'a>(
    pairs: impl IntoIterator<Item = (Option<i32>, Option<&'a str>)>,
) -> Vec<TimeSeriesRow> {
    let mut map: BTreeMap<(i32, &'a str), usize> = BTreeMap::new();
    for pair in pairs {
        if let (Some(year), Some(label)) = pair {
            *map.entry((year, label)).or_insert(0) += 1;
        }
    }
    map.into_iter()
        .map(|((period, label), count)| TimeSeriesRow {
            period,
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Contingency matrix over two label sequences of equal length. Row and
/// column labels are sorted ascending.
pub fn crosstab<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> CrossTab {
    let mut cells: HashMap<(&'a str, &'a str), usize> = HashMap::new();
    let mut row_labels: BTreeSet<&'a str> = BTreeSet::new();
    let mut col_labels: BTreeSet<&'a str> = BTreeSet::new();
    for (a, b) in pairs {
        row_labels.insert(a);
        col_labels.insert(b);
        *cells.entry((a, b)).or_insert(0) += 1;
    }
    let counts = row_labels
        .iter()
        .map(|r| {
            col_labels
                .iter()
                .map(|c| cells.get(&(*r, *c)).copied().unwrap_or(0))
                .collect()
        })
        .collect();
    CrossTab {
        rows: row_labels.into_iter().map(String::from).collect(),
        columns: col_labels.into_iter().map(String::from).collect(),
        counts,
    }
}

fn education_popularity(data: &Dataset, unknown: &str) -> ViewData {
    ViewData::Frequency(value_counts(
        data.records
            .iter()
            .map(|r| r.education_type.as_deref().unwrap_or(unknown)),
    ))
}

fn education_timeline(data: &Dataset, _unknown: &str) -> ViewData {
    ViewData::TimeSeries(grouped_counts(
        data.records
            .iter()
            .map(|r| (r.graduation_year, r.education_type.as_deref())),
    ))
}

fn job_popularity(data: &Dataset, unknown: &str) -> ViewData {
    ViewData::Frequency(value_counts(
        data.records
            .iter()
            .map(|r| r.job_type.as_deref().unwrap_or(unknown)),
    ))
}

fn job_timeline(data: &Dataset, _unknown: &str) -> ViewData {
    ViewData::TimeSeries(grouped_counts(
        data.records
            .iter()
            .map(|r| (r.job_start_year, r.job_type.as_deref())),
    ))
}

fn education_job_crosstab(data: &Dataset, unknown: &str) -> ViewData {
    ViewData::Crosstab(crosstab(data.records.iter().map(|r| {
        (
            r.education_type.as_deref().unwrap_or(unknown),
            r.job_type.as_deref().unwrap_or(unknown),
        )
    })))
}

fn destination_distribution(data: &Dataset, _unknown: &str) -> ViewData {
    ViewData::Frequency(value_counts(
        data.records.iter().map(|r| r.location_country.as_str()),
    ))
}

fn exit_type_ratio(data: &Dataset, unknown: &str) -> ViewData {
    let counts = value_counts(
        data.records
            .iter()
            .map(|r| r.exit_type.as_deref().unwrap_or(unknown)),
    );
    let total: usize = counts.iter().map(|r| r.count).sum();
    let rows = counts
        .into_iter()
        .map(|r| ProportionRow {
            share: if total == 0 {
                0.0
            } else {
                r.count as f64 / total as f64
            },
            label: r.label,
            count: r.count,
        })
        .collect();
    ViewData::Proportions(rows)
}

fn job_start_vs_exit(data: &Dataset, _unknown: &str) -> ViewData {
    let rows = data
        .records
        .iter()
        .filter_map(|r| match (r.job_start_year, r.exit_type.as_deref()) {
            (Some(year), Some(label)) => Some(ObservationRow {
                year,
                label: label.to_string(),
            }),
            _ => None,
        })
        .collect();
    ViewData::Observations(rows)
}
