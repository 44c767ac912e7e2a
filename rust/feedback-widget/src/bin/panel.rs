//! WASM entry point for the feedback widget.
//!
//! This binary is compiled to WebAssembly via Trunk and mounted to the
//! DOM body.

use feedback_widget::components::FeedbackApp;
use leptos::prelude::*;

fn main() {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <FeedbackApp /> });
}
