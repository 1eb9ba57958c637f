// Literal display strings, one static table per language.
//
// Nothing in the aggregation reads these except `unknown`, which the caller
// passes explicitly as the null-fill label.
use crate::reports::ViewKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Persian
    #[default]
    Fa,
    /// English
    En,
}

/// Title and axis captions for one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartText {
    pub title: &'static str,
    pub no_data_title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub series: Option<&'static str>,
}

#[derive(Debug)]
pub struct Labels {
    pub language: Language,
    pub dashboard_title: &'static str,
    pub byline: Option<&'static str>,
    pub unknown: &'static str,

    pub education_tab: &'static str,
    pub job_tab: &'static str,
    pub migration_tab: &'static str,
    pub overview_tab: &'static str,

    pub education_popularity_heading: &'static str,
    pub education_timeline_heading: &'static str,
    pub job_popularity_heading: &'static str,
    pub job_timeline_heading: &'static str,
    pub crosstab_heading: &'static str,
    pub destinations_heading: &'static str,
    pub exit_ratio_heading: &'static str,
    pub job_start_vs_exit_heading: &'static str,

    pub kpi_heading: &'static str,
    pub kpi_total_profiles: &'static str,
    pub kpi_top_destination: &'static str,
    pub kpi_destination_count: &'static str,
    pub summary_heading: &'static str,
    pub summary_text: &'static str,
    pub overview_education_heading: &'static str,
    pub overview_jobs_heading: &'static str,
    pub overview_destinations_heading: &'static str,

    pub education_popularity_chart: ChartText,
    pub education_timeline_chart: ChartText,
    pub job_popularity_chart: ChartText,
    pub job_timeline_chart: ChartText,
    pub crosstab_chart: ChartText,
    pub destinations_chart: ChartText,
    pub exit_ratio_chart: ChartText,
    pub job_start_vs_exit_chart: ChartText,
}

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Fa => &PERSIAN,
            Language::En => &ENGLISH,
        }
    }

    pub fn chart(&self, kind: ViewKind) -> &ChartText {
        match kind {
            ViewKind::EducationPopularity => &self.education_popularity_chart,
            ViewKind::EducationTimeline => &self.education_timeline_chart,
            ViewKind::JobPopularity => &self.job_popularity_chart,
            ViewKind::JobTimeline => &self.job_timeline_chart,
            ViewKind::EducationJobCrosstab => &self.crosstab_chart,
            ViewKind::DestinationDistribution => &self.destinations_chart,
            ViewKind::ExitTypeRatio => &self.exit_ratio_chart,
            ViewKind::JobStartVsExit => &self.job_start_vs_exit_chart,
        }
    }
}

const fn chart(
    title: &'static str,
    no_data_title: &'static str,
    x_axis: &'static str,
    y_axis: &'static str,
    series: Option<&'static str>,
) -> ChartText {
    ChartText {
        title,
        no_data_title,
        x_axis,
        y_axis,
        series,
    }
}

pub static PERSIAN: Labels = Labels {
    language: Language::Fa,
    dashboard_title: "داشبورد تحلیل متخصصان ICT و مهاجرت",
    byline: Some("طراحی و تولید : مهران علم بیگی"),
    unknown: "نامشخص",

    education_tab: "تحلیل تحصیلی",
    job_tab: "تحلیل شغلی",
    migration_tab: "تحلیل مهاجرت",
    overview_tab: "داشبورد کلی",

    education_popularity_heading: "محبوب‌ترین نوع تحصیلات",
    education_timeline_heading: "تغییرات تحصیلی در طول زمان",
    job_popularity_heading: "محبوب‌ترین مشاغل",
    job_timeline_heading: "تغییرات مشاغل در طول زمان",
    crosstab_heading: "ارتباط بین تحصیلات و مشاغل",
    destinations_heading: "کشورهای مقصد مهاجرت",
    exit_ratio_heading: "نسبت انواع خروج (مهاجرت)",
    job_start_vs_exit_heading: "ارتباط بین سال شروع شغل و نوع خروج",

    kpi_heading: "شاخص‌های کلیدی",
    kpi_total_profiles: "👤 تعداد کل متخصصان",
    kpi_top_destination: "🌍 محبوب‌ترین مقصد مهاجرت",
    kpi_destination_count: "📊 تعداد کشورهای مقصد",
    summary_heading: "خلاصه تحلیل‌ها",
    summary_text: "در این بخش خلاصه‌ای از محبوب‌ترین مشاغل، رشته‌های تحصیلی و کشورهای مقصد مهاجرت نمایش داده می‌شود.",
    overview_education_heading: "🎓 محبوب‌ترین رشته‌های تحصیلی",
    overview_jobs_heading: "💼 محبوب‌ترین مشاغل",
    overview_destinations_heading: "🌎 کشورهای مقصد مهاجرت",

    education_popularity_chart: chart(
        "محبوب‌ترین نوع تحصیلات",
        "محبوب‌ترین نوع تحصیلات (داده موجود نیست)",
        "نوع تحصیلات",
        "تعداد",
        None,
    ),
    education_timeline_chart: chart(
        "تغییرات تحصیلی در طول زمان",
        "تغییرات تحصیلی (داده موجود نیست)",
        "سال فارغ‌التحصیلی",
        "تعداد",
        Some("نوع تحصیلات"),
    ),
    job_popularity_chart: chart(
        "محبوب‌ترین مشاغل",
        "محبوب‌ترین مشاغل (داده موجود نیست)",
        "نوع شغل",
        "تعداد",
        None,
    ),
    job_timeline_chart: chart(
        "تغییرات مشاغل در طول زمان",
        "تغییرات مشاغل (داده موجود نیست)",
        "سال شروع شغل",
        "تعداد",
        Some("نوع شغل"),
    ),
    crosstab_chart: chart(
        "ارتباط بین نوع تحصیلات و نوع شغل",
        "ارتباط بین تحصیلات و شغل (داده موجود نیست)",
        "نوع شغل",
        "نوع تحصیلات",
        None,
    ),
    destinations_chart: chart(
        "کشورهای مقصد اصلی مهاجرت متخصصان ICT",
        "کشورهای مقصد اصلی مهاجرت متخصصان ICT (داده موجود نیست)",
        "کشور",
        "تعداد متخصصان",
        None,
    ),
    exit_ratio_chart: chart(
        "نسبت انواع خروج (مهاجرت)",
        "نسبت انواع خروج (داده موجود نیست)",
        "نوع خروج",
        "تعداد",
        None,
    ),
    job_start_vs_exit_chart: chart(
        "ارتباط بین سال شروع شغل و نوع خروج",
        "ارتباط بین سال شروع شغل و نوع خروج (داده موجود نیست)",
        "سال شروع شغل",
        "نوع خروج",
        None,
    ),
};

pub static ENGLISH: Labels = Labels {
    language: Language::En,
    dashboard_title: "ICT Professionals & Migration Dashboard",
    byline: None,
    unknown: "unknown",

    education_tab: "Education Analysis",
    job_tab: "Job Analysis",
    migration_tab: "Migration Analysis",
    overview_tab: "Overview",

    education_popularity_heading: "Most popular education types",
    education_timeline_heading: "Education trends over time",
    job_popularity_heading: "Most popular jobs",
    job_timeline_heading: "Job trends over time",
    crosstab_heading: "Education vs. job",
    destinations_heading: "Migration destinations",
    exit_ratio_heading: "Exit type ratio (migration)",
    job_start_vs_exit_heading: "Job start year vs. exit type",

    kpi_heading: "Key indicators",
    kpi_total_profiles: "👤 Total professionals",
    kpi_top_destination: "🌍 Top migration destination",
    kpi_destination_count: "📊 Destination countries",
    summary_heading: "Analysis summary",
    summary_text: "A summary of the most popular jobs, fields of study and migration destinations.",
    overview_education_heading: "🎓 Most popular fields of study",
    overview_jobs_heading: "💼 Most popular jobs",
    overview_destinations_heading: "🌎 Migration destinations",

    education_popularity_chart: chart(
        "Most popular education types",
        "Most popular education types (no data)",
        "Education type",
        "Count",
        None,
    ),
    education_timeline_chart: chart(
        "Education trends over time",
        "Education trends (no data)",
        "Graduation year",
        "Count",
        Some("Education type"),
    ),
    job_popularity_chart: chart(
        "Most popular jobs",
        "Most popular jobs (no data)",
        "Job type",
        "Count",
        None,
    ),
    job_timeline_chart: chart(
        "Job trends over time",
        "Job trends (no data)",
        "Job start year",
        "Count",
        Some("Job type"),
    ),
    crosstab_chart: chart(
        "Education type vs. job type",
        "Education vs. job (no data)",
        "Job type",
        "Education type",
        None,
    ),
    destinations_chart: chart(
        "Main migration destinations of ICT professionals",
        "Main migration destinations of ICT professionals (no data)",
        "Country",
        "Professionals",
        None,
    ),
    exit_ratio_chart: chart(
        "Exit type ratio (migration)",
        "Exit type ratio (no data)",
        "Exit type",
        "Count",
        None,
    ),
    job_start_vs_exit_chart: chart(
        "Job start year vs. exit type",
        "Job start year vs. exit type (no data)",
        "Job start year",
        "Exit type",
        None,
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_no_data_title_is_marked() {
        for kind in ViewKind::ALL {
            assert!(ENGLISH.chart(kind).no_data_title.ends_with("(no data)"));
            assert!(PERSIAN
                .chart(kind)
                .no_data_title
                .ends_with("(داده موجود نیست)"));
        }
    }

    #[test]
    fn each_view_gets_its_own_chart_text() {
        assert_eq!(
            ENGLISH.chart(ViewKind::ExitTypeRatio).title,
            "Exit type ratio (migration)"
        );
        assert_eq!(
            ENGLISH.chart(ViewKind::EducationJobCrosstab).title,
            "Education type vs. job type"
        );
        assert_eq!(
            ENGLISH.chart(ViewKind::JobStartVsExit).y_axis,
            "Exit type"
        );
        assert_eq!(
            PERSIAN.chart(ViewKind::DestinationDistribution).x_axis,
            "کشور"
        );
        assert_eq!(
            ENGLISH.chart(ViewKind::JobTimeline).series,
            Some("Job type")
        );
        let titles: std::collections::HashSet<&str> =
            ViewKind::ALL.iter().map(|k| ENGLISH.chart(*k).title).collect();
        assert_eq!(titles.len(), ViewKind::ALL.len());
    }

    #[test]
    fn language_selects_table() {
        assert_eq!(Labels::for_language(Language::En).unknown, "unknown");
        assert_eq!(Labels::for_language(Language::Fa).unknown, "نامشخص");
        assert_eq!(Labels::for_language(Language::default()).language, Language::Fa);
    }
}
