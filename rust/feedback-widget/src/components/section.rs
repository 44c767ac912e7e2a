use leptos::prelude::*;

/// A titled region of the widget.
#[component]
pub fn Section(
    /// Heading text
    title: &'static str,
    /// Section body
    children: Children,
) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-3xl font-bold text-gray-800 mb-6">{title}</h2>
            {children()}
        </section>
    }
}
