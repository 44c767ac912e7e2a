use crate::{Category, Locale, TallySummary};

/// Background emphasis of a statistic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Plain background, used for per-category counts
    Plain,
    /// Used for the total count
    Total,
    /// Used for the positive percentage
    Positive,
}

/// One read-only line of the statistics panel: `marker label: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticLine {
    /// Leading emoji
    pub marker: &'static str,
    /// Localized label
    pub label: &'static str,
    /// Formatted value
    pub value: String,
    /// Background emphasis
    pub highlight: Highlight,
}

/// The five statistic lines for `summary`: one per category, then the
/// total, then the positive percentage suffixed with `%`.
pub fn statistic_lines(summary: &TallySummary, locale: Locale) -> Vec<StatisticLine> {
    let mut lines: Vec<StatisticLine> = Category::ALL
        .into_iter()
        .map(|category| StatisticLine {
            marker: category.marker(),
            label: locale.category_label(category),
            value: summary.count(category).to_string(),
            highlight: Highlight::Plain,
        })
        .collect();

    lines.push(StatisticLine {
        marker: "📊",
        label: locale.total_label(),
        value: summary.total.to_string(),
        highlight: Highlight::Total,
    });

    lines.push(StatisticLine {
        marker: "📈",
        label: locale.positive_label(),
        value: format!("{}%", summary.positive_percentage),
        highlight: Highlight::Positive,
    });

    lines
}
