//! Leptos UI components for the feedback widget.

mod feedback_options;
mod notification;
mod section;
mod statistics;

pub use feedback_options::*;
pub use notification::*;
pub use section::*;
pub use statistics::*;

use feedback_tally::{Category, DisplayState, FeedbackTally, Heading, Locale};
use leptos::prelude::*;

/// Root component for the feedback widget.
///
/// Owns the session's tally. Activating an option records it, and the
/// statistics section re-renders from the signal: the empty notice while
/// nothing has been recorded, the statistics panel afterwards.
#[component]
pub fn FeedbackApp(
    /// Label table; Ukrainian unless given.
    #[prop(optional)]
    locale: Locale,
) -> impl IntoView {
    let tally = RwSignal::new(FeedbackTally::default());

    let on_leave_feedback =
        move |category: Category| tally.update(|tally| tally.record(category));

    view! {
        <div class="bg-gray-50 min-h-screen flex items-center justify-center p-4">
            <div class="max-w-2xl w-full bg-white p-8 rounded-2xl shadow-lg">
                <Section title=locale.heading(Heading::Prompt)>
                    <FeedbackOptions
                        options=Category::ALL.to_vec()
                        locale=locale
                        on_leave_feedback=on_leave_feedback
                    />
                </Section>

                <Section title=locale.heading(Heading::Statistics)>
                    {move || match tally.get().display_state() {
                        DisplayState::Empty => view! {
                            <Notification message=locale.empty_notice() />
                        }.into_any(),
                        DisplayState::Statistics(summary) => view! {
                            <Statistics summary=summary locale=locale />
                        }.into_any(),
                    }}
                </Section>
            </div>
        </div>
    }
}
