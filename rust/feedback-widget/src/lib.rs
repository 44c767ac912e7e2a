#![warn(missing_docs)]

//! Browser front end for [`feedback_tally`].
//!
//! The widget is a Leptos CSR component tree. [`components::FeedbackApp`]
//! owns the tally in a reactive signal; every other component is a pure
//! function of its props:
//!
//! ```text
//! FeedbackApp
//! ├── Section (prompt)
//! │   └── FeedbackOptions     (one button per category)
//! └── Section (statistics)
//!     ├── Statistics          (when something was recorded)
//!     └── Notification        (otherwise)
//! ```
//!
//! # Entry points
//!
//! - **`panel`** binary: compiled to WebAssembly and mounted to the
//!   document body.

pub mod components;

pub mod style;
