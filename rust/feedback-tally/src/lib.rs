#![warn(missing_docs)]

//! # feedback-tally
//!
//! The domain core shared by the feedback front ends. A user picks one of a
//! fixed set of [`Category`] options; a [`FeedbackTally`] counts the picks
//! and derives the total and the share of positive feedback.
//!
//! Nothing here renders anything. Front ends ask the tally for its
//! [`DisplayState`] on every render and draw either the empty notice or the
//! five [`StatisticLine`]s, labeled through a [`Locale`].
//!
//! ## Example
//!
//! ```
//! use feedback_tally::{Category, DisplayState, FeedbackTally};
//!
//! let mut tally = FeedbackTally::default();
//! assert_eq!(tally.display_state(), DisplayState::Empty);
//!
//! tally.record(Category::Good);
//! tally.record(Category::Neutral);
//! tally.record(Category::Bad);
//!
//! assert_eq!(tally.total(), 3);
//! assert_eq!(tally.positive_percentage(), 33);
//! ```
//!
//! String keys coming from outside the type system go through
//! [`FeedbackTally::record_key`], which ignores anything it does not
//! recognize:
//!
//! ```
//! use feedback_tally::FeedbackTally;
//!
//! let mut tally = FeedbackTally::default();
//! assert!(tally.record_key("excellent").is_none());
//! assert_eq!(tally.total(), 0);
//! ```

mod error;
pub use error::*;

mod category;
pub use category::*;

mod tally;
pub use tally::*;

mod locale;
pub use locale::*;

mod presentation;
pub use presentation::*;

mod store;
pub use store::*;
