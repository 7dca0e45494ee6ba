//! Label filters applied to the log list

use logdetail_core::LogLine;
use serde::Serialize;

/// Whether a filter keeps or drops matching lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Include,
    Exclude,
}

impl FilterMode {
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterMode::Include => "=",
            FilterMode::Exclude => "!=",
        }
    }
}

/// A single `key=value` label filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelFilter {
    pub key: String,
    pub value: String,
    pub mode: FilterMode,
}

impl LabelFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            mode,
        }
    }

    pub fn matches(&self, line: &LogLine) -> bool {
        let carries = line.label(&self.key) == Some(self.value.as_str());
        match self.mode {
            FilterMode::Include => carries,
            FilterMode::Exclude => !carries,
        }
    }
}

impl std::fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\"{}\"", self.key, self.mode.symbol(), self.value)
    }
}

/// Active filters; a line is shown when it matches all of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilters {
    filters: Vec<LabelFilter>,
}

impl LabelFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter. An existing filter on the same key/value changes mode.
    pub fn add(&mut self, filter: LabelFilter) {
        match self
            .filters
            .iter_mut()
            .find(|f| f.key == filter.key && f.value == filter.value)
        {
            Some(existing) => existing.mode = filter.mode,
            None => self.filters.push(filter),
        }
    }

    pub fn remove(&mut self, key: &str, value: &str) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| !(f.key == key && f.value == value));
        self.filters.len() != before
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelFilter> {
        self.filters.iter()
    }

    pub fn matches(&self, line: &LogLine) -> bool {
        self.filters.iter().all(|f| f.matches(line))
    }

    /// Indices of the lines that pass every filter
    pub fn visible_indices(&self, lines: &[LogLine]) -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.matches(line))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<LogLine> {
        vec![
            LogLine::new("a").with_label("app", "api"),
            LogLine::new("b").with_label("app", "web"),
            LogLine::new("c"),
        ]
    }

    #[test]
    fn test_no_filters_show_everything() {
        assert_eq!(LabelFilters::new().visible_indices(&lines()), vec![0, 1, 2]);
    }

    #[test]
    fn test_include_filter() {
        let mut filters = LabelFilters::new();
        filters.add(LabelFilter::new("app", "api", FilterMode::Include));
        assert_eq!(filters.visible_indices(&lines()), vec![0]);
    }

    #[test]
    fn test_exclude_filter_keeps_unlabelled_lines() {
        let mut filters = LabelFilters::new();
        filters.add(LabelFilter::new("app", "api", FilterMode::Exclude));
        assert_eq!(filters.visible_indices(&lines()), vec![1, 2]);
    }

    #[test]
    fn test_same_key_value_replaces_mode() {
        let mut filters = LabelFilters::new();
        filters.add(LabelFilter::new("app", "api", FilterMode::Include));
        filters.add(LabelFilter::new("app", "api", FilterMode::Exclude));
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.iter().next().unwrap().mode, FilterMode::Exclude);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut filters = LabelFilters::new();
        filters.add(LabelFilter::new("app", "api", FilterMode::Include));
        filters.add(LabelFilter::new("app", "web", FilterMode::Exclude));
        assert!(filters.remove("app", "api"));
        assert!(!filters.remove("app", "api"));
        assert_eq!(filters.len(), 1);
        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_display() {
        let include = LabelFilter::new("app", "api", FilterMode::Include);
        let exclude = LabelFilter::new("app", "api", FilterMode::Exclude);
        assert_eq!(include.to_string(), "app=\"api\"");
        assert_eq!(exclude.to_string(), "app!=\"api\"");
    }
}
