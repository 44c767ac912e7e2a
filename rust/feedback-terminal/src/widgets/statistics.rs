use feedback_tally::{Highlight, Locale, TallySummary, statistic_lines};
use ratatui::{prelude::*, widgets::Paragraph};

/// Read-only list of the three counts, the total and the positive
/// percentage.
pub struct StatisticsPanel {
    /// Numbers to show
    pub summary: TallySummary,
    /// Label table for the captions
    pub locale: Locale,
}

fn highlight_style(highlight: Highlight) -> Style {
    match highlight {
        Highlight::Plain => Style::new(),
        Highlight::Total => Style::new().fg(Color::LightBlue),
        Highlight::Positive => Style::new().fg(Color::LightGreen),
    }
}

impl Widget for StatisticsPanel {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines: Vec<Line> = statistic_lines(&self.summary, self.locale)
            .into_iter()
            .map(|line| {
                Line::from(vec![
                    Span::raw(line.marker),
                    Span::raw(" "),
                    Span::raw(line.label),
                    Span::raw(": "),
                    Span::raw(line.value).bold(),
                ])
                .style(highlight_style(line.highlight))
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
