//! UI widgets for the feedback TUI application.
//!
//! [`FeedbackApp`] lays out the screen and picks between the statistics
//! panel and the empty notice. The remaining widgets are pure functions of
//! their fields.

mod app;
pub use app::*;

mod section;
pub use section::*;

mod options;
pub use options::*;

mod statistics;
pub use statistics::*;

mod notice;
pub use notice::*;
