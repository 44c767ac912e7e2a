//! Utility-class lookups for the widget markup.

use feedback_tally::{Category, Highlight};

/// Classes shared by every option button.
pub const OPTION_BASE: &str = "px-6 py-3 text-white font-semibold rounded-lg shadow-md transition-transform transform hover:scale-105 focus:outline-none focus:ring-2 focus:ring-offset-2";

/// Background colour classes for `category`'s button.
pub fn option_tone(category: Category) -> &'static str {
    match category {
        Category::Good => "bg-green-500 hover:bg-green-600",
        Category::Neutral => "bg-yellow-500 hover:bg-yellow-600",
        Category::Bad => "bg-red-500 hover:bg-red-600",
    }
}

/// Full class list for `category`'s button.
pub fn option_class(category: Category) -> String {
    format!("{OPTION_BASE} {}", option_tone(category))
}

/// Class list for a statistic line with the given highlight.
pub fn statistic_class(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Plain => "p-4 bg-gray-100 rounded-lg",
        Highlight::Total => "p-4 bg-blue-100 rounded-lg",
        Highlight::Positive => "p-4 bg-green-100 rounded-lg",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_gives_every_option_its_own_colour() {
        let tones: BTreeSet<&str> = Category::ALL.into_iter().map(option_tone).collect();
        assert_eq!(tones.len(), Category::COUNT);
    }

    #[test]
    fn it_prefixes_option_tones_with_the_shared_classes() {
        assert_eq!(
            option_class(Category::Bad),
            format!("{OPTION_BASE} bg-red-500 hover:bg-red-600")
        );
    }
}
