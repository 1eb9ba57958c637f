use crate::types::{Dataset, SummaryStats};
use std::collections::{BTreeMap, HashSet};

/// Headline numbers for the overview tab.
///
/// `top_destination` is the most common normalized destination; ties go to
/// the label that sorts first. When every destination is empty (or there
/// are no rows) the `unknown` label is reported instead.
pub fn generate_summary(data: &Dataset, unknown: &str) -> SummaryStats {
    let total_profiles = data.len();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in &data.records {
        *counts.entry(r.location_country.as_str()).or_insert(0) += 1;
    }
    let all_empty = counts.keys().all(|k| k.is_empty());
    let top_destination = if all_empty {
        unknown.to_string()
    } else {
        // `max_by_key` keeps the last maximum, so walk the sorted map in
        // reverse to land on the smallest tied label.
        counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(label, _)| label.to_string())
            .unwrap_or_else(|| unknown.to_string())
    };

    let distinct: HashSet<&str> = data
        .records
        .iter()
        .map(|r| r.location_country.as_str())
        .collect();

    SummaryStats {
        total_profiles,
        top_destination,
        distinct_destinations: distinct.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_dataset;

    fn summary(csv: &str) -> SummaryStats {
        let (ds, _) = read_dataset(csv.as_bytes()).unwrap();
        generate_summary(&ds, "unknown")
    }

    #[test]
    fn counts_normalized_destinations() {
        let s = summary("location_country\nUSA\nusa \n Canada\n");
        assert_eq!(s.total_profiles, 3);
        assert_eq!(s.top_destination, "usa");
        assert_eq!(s.distinct_destinations, 2);
    }

    #[test]
    fn ties_resolve_to_first_label_in_sorted_order() {
        let s = summary("location_country\nnorway\ncanada\nNorway\nCanada\ngermany\n");
        assert_eq!(s.top_destination, "canada");
    }

    #[test]
    fn empty_destinations_count_as_a_value() {
        let s = summary("location_country\n\"\"\n\"\"\nIran\n");
        assert_eq!(s.top_destination, "");
        assert_eq!(s.distinct_destinations, 2);
    }

    #[test]
    fn all_missing_destinations_report_placeholder() {
        let s = summary("location_country,exit_type\n,work\n,study\n");
        assert_eq!(s.top_destination, "unknown");
        assert_eq!(s.distinct_destinations, 1);

        let s = summary("location_country\n");
        assert_eq!(s.total_profiles, 0);
        assert_eq!(s.top_destination, "unknown");
        assert_eq!(s.distinct_destinations, 0);
    }
}
