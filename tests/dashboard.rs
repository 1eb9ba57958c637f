use ict_dashboard::dashboard::SectionId;
use ict_dashboard::labels::ENGLISH;
use ict_dashboard::types::TimeSeriesRow;
use ict_dashboard::{build_dashboard, load, output, LoadError, ViewData, ViewKind};
use std::fs;

const PROFILES: &str = "\
name,location_country,history[0].type,history[0].end_date,history[1].type,history[1].start_date,exit_type
a,Germany,Bachelor,2015-06-30,Developer,2016-01-01,work visa
b, germany ,Master,2018-09-01,Developer,2018-10-01,study
c,Canada,Bachelor,bad-date,Data Scientist,2019-03-15,work visa
d,,Master,2018-01-01,,not-a-date,
e,Netherlands,,2020-02-01,Developer,2021-05-01,work visa
";

fn write_profiles(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("profiles.csv");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn full_pipeline_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_profiles(&dir, PROFILES);

    let (data, report) = load(&path).unwrap();
    assert_eq!(report.total_rows, 5);
    assert_eq!(report.ignored_columns, vec!["name".to_string()]);
    assert_eq!(report.undated_graduations, 1);
    assert_eq!(report.undated_job_starts, 1);

    let dashboard = build_dashboard(&data, &ENGLISH);
    assert!(dashboard.views.iter().all(|v| !v.is_placeholder()));

    assert_eq!(dashboard.summary.total_profiles, 5);
    assert_eq!(dashboard.summary.top_destination, "germany");
    assert_eq!(dashboard.summary.distinct_destinations, 4);

    let ViewData::TimeSeries(rows) = &dashboard.view(ViewKind::EducationTimeline).unwrap().data
    else {
        panic!("expected a time series");
    };
    assert_eq!(
        *rows,
        vec![
            TimeSeriesRow {
                period: 2015,
                label: "Bachelor".into(),
                count: 1
            },
            TimeSeriesRow {
                period: 2018,
                label: "Master".into(),
                count: 2
            },
        ]
    );

    let ViewData::Crosstab(tab) = &dashboard.view(ViewKind::EducationJobCrosstab).unwrap().data
    else {
        panic!("expected a crosstab");
    };
    assert_eq!(tab.total(), 5);

    let ViewData::Observations(points) = &dashboard.view(ViewKind::JobStartVsExit).unwrap().data
    else {
        panic!("expected observations");
    };
    assert_eq!(points.len(), 4);
}

#[test]
fn sparse_file_degrades_to_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_profiles(&dir, "location_country\nUSA\nusa \n Canada\n");

    let (data, _) = load(&path).unwrap();
    let dashboard = build_dashboard(&data, &ENGLISH);

    let placeholders: Vec<ViewKind> = dashboard
        .views
        .iter()
        .filter(|v| v.is_placeholder())
        .map(|v| v.kind)
        .collect();
    assert_eq!(placeholders.len(), 7);
    assert!(!placeholders.contains(&ViewKind::DestinationDistribution));

    let education = dashboard.section(SectionId::Education).unwrap();
    assert_eq!(
        education.panels[0].title,
        "Most popular education types (no data)"
    );
    assert_eq!(education.panels[1].title, "Education trends (no data)");
    assert_eq!(dashboard.summary.distinct_destinations, 2);
}

#[test]
fn exports_land_next_to_each_other() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_profiles(&dir, PROFILES);
    let (data, _) = load(&path).unwrap();
    let dashboard = build_dashboard(&data, &ENGLISH);

    let out = dir.path().join("out");
    let written = output::export_views(&out, &dashboard.views).unwrap();
    assert_eq!(written.len(), ViewKind::ALL.len());
    for kind in ViewKind::ALL {
        assert!(out.join(format!("{}.csv", kind.name())).exists());
    }

    let json = out.join("dashboard.json");
    output::write_json(&json, &dashboard).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(value["sections"][3]["kpis"][1]["value"], "germany");
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("emigrate_ict.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
