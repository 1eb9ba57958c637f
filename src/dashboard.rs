use crate::labels::{Labels, Language};
use crate::reports::{compute_views, AggregateView, AggregateViews, ChartKind, ViewKind};
use crate::summary::generate_summary;
use crate::types::{Dataset, SummaryStats};
use crate::util::format_int;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Education,
    Jobs,
    Migration,
    Overview,
}

/// One chart slot inside a tab.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub heading: String,
    pub view: ViewKind,
    pub chart: ChartKind,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpi_heading: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kpis: Vec<KpiCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    pub panels: Vec<Panel>,
}

impl Section {
    fn charts(id: SectionId, label: &str, panels: Vec<Panel>) -> Self {
        Section {
            id,
            label: label.to_string(),
            kpi_heading: None,
            kpis: Vec::new(),
            summary_heading: None,
            summary_text: None,
            panels,
        }
    }
}

/// Everything the renderer needs: literal text, section layout and the
/// precomputed views the panels point at.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub language: Language,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,
    pub summary: SummaryStats,
    pub sections: Vec<Section>,
    pub views: AggregateViews,
}

impl Dashboard {
    pub fn view(&self, kind: ViewKind) -> Option<&AggregateView> {
        self.views.get(kind)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Load-to-layout in one call: compute the views and KPIs, then arrange them.
pub fn build_dashboard(data: &Dataset, labels: &Labels) -> Dashboard {
    let views = compute_views(data, labels.unknown);
    let summary = generate_summary(data, labels.unknown);
    assemble(views, summary, labels)
}

fn panel(heading: &str, views: &AggregateViews, kind: ViewKind, labels: &Labels) -> Panel {
    let text = labels.chart(kind);
    let placeholder = views.is_placeholder(kind);
    let title = if placeholder {
        text.no_data_title
    } else {
        text.title
    };
    Panel {
        heading: heading.to_string(),
        view: kind,
        chart: kind.chart(),
        title: title.to_string(),
        x_axis: text.x_axis.to_string(),
        y_axis: text.y_axis.to_string(),
        series: text.series.map(String::from),
        placeholder,
    }
}

/// Arrange views and KPIs into the four fixed tabs.
pub fn assemble(views: AggregateViews, summary: SummaryStats, labels: &Labels) -> Dashboard {
    let education = Section::charts(
        SectionId::Education,
        labels.education_tab,
        vec![
            panel(
                labels.education_popularity_heading,
                &views,
                ViewKind::EducationPopularity,
                labels,
            ),
            panel(
                labels.education_timeline_heading,
                &views,
                ViewKind::EducationTimeline,
                labels,
            ),
        ],
    );

    let jobs = Section::charts(
        SectionId::Jobs,
        labels.job_tab,
        vec![
            panel(
                labels.job_popularity_heading,
                &views,
                ViewKind::JobPopularity,
                labels,
            ),
            panel(labels.job_timeline_heading, &views, ViewKind::JobTimeline, labels),
            panel(
                labels.crosstab_heading,
                &views,
                ViewKind::EducationJobCrosstab,
                labels,
            ),
        ],
    );

    let migration = Section::charts(
        SectionId::Migration,
        labels.migration_tab,
        vec![
            panel(
                labels.destinations_heading,
                &views,
                ViewKind::DestinationDistribution,
                labels,
            ),
            panel(
                labels.exit_ratio_heading,
                &views,
                ViewKind::ExitTypeRatio,
                labels,
            ),
            panel(
                labels.job_start_vs_exit_heading,
                &views,
                ViewKind::JobStartVsExit,
                labels,
            ),
        ],
    );

    let overview = Section {
        id: SectionId::Overview,
        label: labels.overview_tab.to_string(),
        kpi_heading: Some(labels.kpi_heading.to_string()),
        kpis: vec![
            KpiCard {
                label: labels.kpi_total_profiles.to_string(),
                value: format_int(summary.total_profiles),
            },
            KpiCard {
                label: labels.kpi_top_destination.to_string(),
                value: summary.top_destination.clone(),
            },
            KpiCard {
                label: labels.kpi_destination_count.to_string(),
                value: summary.distinct_destinations.to_string(),
            },
        ],
        summary_heading: Some(labels.summary_heading.to_string()),
        summary_text: Some(labels.summary_text.to_string()),
        panels: vec![
            panel(
                labels.overview_education_heading,
                &views,
                ViewKind::EducationPopularity,
                labels,
            ),
            panel(
                labels.overview_jobs_heading,
                &views,
                ViewKind::JobPopularity,
                labels,
            ),
            panel(
                labels.overview_destinations_heading,
                &views,
                ViewKind::DestinationDistribution,
                labels,
            ),
        ],
    };

    Dashboard {
        language: labels.language,
        title: labels.dashboard_title.to_string(),
        byline: labels.byline.map(String::from),
        summary,
        sections: vec![education, jobs, migration, overview],
        views,
    }
}
