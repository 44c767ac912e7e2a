//! Option selector component.

use feedback_tally::{Category, Locale};
use leptos::prelude::*;

use crate::style::option_class;

/// Row of activation buttons, one per category.
///
/// Clicking a button calls `on_leave_feedback` with that button's
/// category. Holds no state of its own.
#[component]
pub fn FeedbackOptions(
    /// Categories to offer, in display order.
    options: Vec<Category>,
    /// Label table for the button captions.
    locale: Locale,
    /// Callback invoked when an option is activated.
    on_leave_feedback: impl Fn(Category) + Send + Sync + 'static + Clone,
) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {options.into_iter().map(|option| {
                let on_leave_feedback = on_leave_feedback.clone();
                view! {
                    <button
                        class=option_class(option)
                        on:click=move |_| on_leave_feedback(option)
                    >
                        {locale.option_label(option)}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
