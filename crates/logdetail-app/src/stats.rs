//! Ad-hoc value statistics for a label, field or column across all lines

use std::collections::HashMap;

use logdetail_core::{field_value, Column, LogLine};
use serde::Serialize;

/// Value of the entry that folds everything past the limit
pub const OTHER_VALUE: &str = "Other";

/// How often one value occurs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStat {
    pub value: String,
    pub count: usize,
    /// Share of all counted occurrences, in `0.0..=1.0`
    pub proportion: f64,
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<LabelStat> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;
    for value in values {
        *counts.entry(value).or_default() += 1;
        total += 1;
    }

    let mut stats: Vec<LabelStat> = counts
        .into_iter()
        .map(|(value, count)| LabelStat {
            value: value.to_string(),
            count,
            proportion: count as f64 / total as f64,
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    stats
}

/// Value counts of label `key` over the lines that carry it
pub fn calculate_label_stats(lines: &[LogLine], key: &str) -> Vec<LabelStat> {
    tally(lines.iter().filter_map(|line| line.label(key)))
}

/// Value counts of the detected field `key` over the lines whose entry has it.
///
/// `parse_json` must match the setting the details model was built with.
pub fn calculate_field_stats(lines: &[LogLine], key: &str, parse_json: bool) -> Vec<LabelStat> {
    let values: Vec<String> = lines
        .iter()
        .filter_map(|line| field_value(&line.entry, key, parse_json))
        .collect();
    tally(values.iter().map(String::as_str))
}

/// Value counts over the non-missing cells of `column`
pub fn calculate_column_stats(column: &Column) -> Vec<LabelStat> {
    tally(column.values.iter().filter_map(|v| v.as_deref()))
}

/// Top values of a stats list with the remainder folded together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub entries: Vec<LabelStat>,
    /// Everything past the limit, as a single [`OTHER_VALUE`] entry
    pub other: Option<LabelStat>,
    /// Total counted occurrences
    pub total: usize,
}

impl StatsSummary {
    pub fn new(mut stats: Vec<LabelStat>, limit: usize) -> Self {
        let total = stats.iter().map(|s| s.count).sum();
        let rest = stats.split_off(limit.min(stats.len()));

        let other = (!rest.is_empty()).then(|| {
            let count: usize = rest.iter().map(|s| s.count).sum();
            LabelStat {
                value: OTHER_VALUE.to_string(),
                count,
                proportion: rest.iter().map(|s| s.proportion).sum(),
            }
        });

        Self {
            entries: stats,
            other,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top entries followed by the "Other" entry, if any
    pub fn rows(&self) -> impl Iterator<Item = &LabelStat> {
        self.entries.iter().chain(self.other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<LogLine> {
        vec![
            LogLine::new("status=200 path=/a").with_label("app", "api"),
            LogLine::new("status=500 path=/b").with_label("app", "web"),
            LogLine::new("status=200").with_label("app", "api"),
            LogLine::new("no fields here"),
        ]
    }

    #[test]
    fn test_label_stats_sorted_by_count() {
        let stats = calculate_label_stats(&lines(), "app");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].value, "api");
        assert_eq!(stats[0].count, 2);
        assert!((stats[0].proportion - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(stats[1].value, "web");
    }

    #[test]
    fn test_ties_sorted_by_value() {
        let lines = vec![
            LogLine::new("").with_label("k", "b"),
            LogLine::new("").with_label("k", "a"),
        ];
        let values: Vec<_> = calculate_label_stats(&lines, "k")
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_field_stats() {
        let stats = calculate_field_stats(&lines(), "status", false);
        assert_eq!(stats[0].value, "200");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].value, "500");
        assert!(calculate_field_stats(&lines(), "missing", false).is_empty());
    }

    #[test]
    fn test_field_stats_over_json_entries() {
        let lines = vec![
            LogLine::new(r#"{"status":"404"}"#),
            LogLine::new(r#"{"status":"404"}"#),
            LogLine::new("status=200"),
        ];
        let stats = calculate_field_stats(&lines, "status", true);
        assert_eq!(stats[0].value, "404");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].value, "200");

        let logfmt_only = calculate_field_stats(&lines, "status", false);
        assert_eq!(logfmt_only.len(), 1);
        assert_eq!(logfmt_only[0].value, "200");
    }

    #[test]
    fn test_column_stats_skip_missing() {
        let column = Column {
            name: "level".into(),
            values: vec![Some("info".into()), None, Some("info".into())],
            config: Default::default(),
        };
        let stats = calculate_column_stats(&column);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].proportion, 1.0);
    }

    #[test]
    fn test_summary_folds_rest_into_other() {
        let lines: Vec<LogLine> = ["a", "a", "b", "c", "d"]
            .iter()
            .map(|v| LogLine::new("").with_label("k", *v))
            .collect();
        let summary = StatsSummary::new(calculate_label_stats(&lines, "k"), 2);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.entries.len(), 2);
        let other = summary.other.as_ref().unwrap();
        assert_eq!(other.value, OTHER_VALUE);
        assert_eq!(other.count, 2);
        assert_eq!(summary.rows().count(), 3);
    }

    #[test]
    fn test_summary_within_limit_has_no_other() {
        let summary = StatsSummary::new(calculate_label_stats(&lines(), "app"), 5);
        assert!(summary.other.is_none());
        assert_eq!(summary.rows().count(), 2);
        assert!(StatsSummary::new(Vec::new(), 5).is_empty());
    }
}
