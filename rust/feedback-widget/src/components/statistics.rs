use feedback_tally::{Locale, TallySummary, statistic_lines};
use leptos::prelude::*;

use crate::style::statistic_class;

/// Read-only panel with the three counts, the total and the positive
/// percentage.
#[component]
pub fn Statistics(
    /// Numbers to show.
    summary: TallySummary,
    /// Label table for the line captions.
    locale: Locale,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 text-lg">
            {statistic_lines(&summary, locale).into_iter().map(|line| {
                view! {
                    <p class=statistic_class(line.highlight)>
                        {line.marker}" "{line.label}": "
                        <span class="font-bold">{line.value}</span>
                    </p>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
