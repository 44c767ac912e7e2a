use leptos::prelude::*;

/// Informational message shown in place of the statistics panel.
#[component]
pub fn Notification(
    /// Text to show.
    message: &'static str,
) -> impl IntoView {
    view! { <p class="text-gray-500 text-lg">{message}</p> }
}
