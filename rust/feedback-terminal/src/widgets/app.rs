//! Main application widget for the feedback TUI.

use feedback_tally::{DisplayState, Heading};
use ratatui::prelude::*;

use crate::{EmptyNotice, FeedbackState, OptionBar, Section, StatisticsPanel};

/// Main application widget that renders the overall TUI layout.
///
/// This widget handles the top-level layout including:
/// - Header with the application title
/// - Prompt section with the option controls
/// - Statistics section with either the statistics panel or the notice
/// - Footer with help text
pub struct FeedbackApp {}

impl StatefulWidget for &FeedbackApp {
    type State = FeedbackState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let [header_area, prompt_area, statistics_area, footer_area] = vertical.areas(area);

        Line::from("Feedback").bold().centered().render(header_area, buf);

        Section {
            title: state.locale.heading(Heading::Prompt),
            body: OptionBar {
                locale: state.locale,
                selected: state.selected,
            },
        }
        .render(prompt_area, buf);

        let statistics_title = state.locale.heading(Heading::Statistics);
        match state.tally().display_state() {
            DisplayState::Empty => Section {
                title: statistics_title,
                body: EmptyNotice {
                    message: state.locale.empty_notice(),
                },
            }
            .render(statistics_area, buf),
            DisplayState::Statistics(summary) => Section {
                title: statistics_title,
                body: StatisticsPanel {
                    summary,
                    locale: state.locale,
                },
            }
            .render(statistics_area, buf),
        }

        Line::raw("1-3 or ◄ ► + Enter to vote | Press 'q' to quit")
            .centered()
            .render(footer_area, buf);
    }
}
