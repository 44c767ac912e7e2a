//! Static label tables.
//!
//! Every displayed string is looked up here by an exhaustive `match`, per
//! [`Locale`]. Option labels are the one lookup that may be missing: when a
//! locale has no translation for a category, the capitalized category key
//! is shown instead.

use std::{fmt, str::FromStr};

use crate::{Category, FeedbackTallyError};

/// The label table used to render the widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Ukrainian labels
    #[default]
    Ukrainian,
    /// English labels; option controls fall back to the category keys
    English,
}

/// The two section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Heading above the option selector
    Prompt,
    /// Heading above the statistics panel or the empty notice
    Statistics,
}

impl Locale {
    /// The short code used on the command line
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ukrainian => "uk",
            Locale::English => "en",
        }
    }

    /// The translated option label for `category`, if this locale has one
    pub fn translation(self, category: Category) -> Option<&'static str> {
        match (self, category) {
            (Locale::Ukrainian, Category::Good) => Some("Добре"),
            (Locale::Ukrainian, Category::Neutral) => Some("Нейтрально"),
            (Locale::Ukrainian, Category::Bad) => Some("Погано"),
            (Locale::English, _) => None,
        }
    }

    /// The label on the activation control for `category`
    pub fn option_label(self, category: Category) -> String {
        match self.translation(category) {
            Some(label) => label.to_string(),
            None => capitalize(category.key()),
        }
    }

    /// The label in front of `category`'s count in the statistics panel
    pub fn category_label(self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Ukrainian, Category::Good) => "Добре",
            (Locale::Ukrainian, Category::Neutral) => "Нейтрально",
            (Locale::Ukrainian, Category::Bad) => "Погано",
            (Locale::English, Category::Good) => "Good",
            (Locale::English, Category::Neutral) => "Neutral",
            (Locale::English, Category::Bad) => "Bad",
        }
    }

    /// The label in front of the total count
    pub fn total_label(self) -> &'static str {
        match self {
            Locale::Ukrainian => "Всього відгуків",
            Locale::English => "Total feedback",
        }
    }

    /// The label in front of the positive percentage
    pub fn positive_label(self) -> &'static str {
        match self {
            Locale::Ukrainian => "Позитивні відгуки",
            Locale::English => "Positive feedback",
        }
    }

    /// The title of a section
    pub fn heading(self, heading: Heading) -> &'static str {
        match (self, heading) {
            (Locale::Ukrainian, Heading::Prompt) => "Будь ласка, залиште відгук",
            (Locale::Ukrainian, Heading::Statistics) => "Статистика",
            (Locale::English, Heading::Prompt) => "Please leave feedback",
            (Locale::English, Heading::Statistics) => "Statistics",
        }
    }

    /// The message shown while nothing has been recorded
    pub fn empty_notice(self) -> &'static str {
        match self {
            Locale::Ukrainian => "Відгуків ще немає",
            Locale::English => "No feedback yet",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = FeedbackTallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uk" | "ukrainian" => Ok(Locale::Ukrainian),
            "en" | "english" => Ok(Locale::English),
            _ => Err(FeedbackTallyError::UnknownLocale(s.to_string())),
        }
    }
}

/// Uppercases the first character of `key`.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn it_uses_translations_when_present() {
        let labels: Vec<String> = Category::ALL
            .into_iter()
            .map(|category| Locale::Ukrainian.option_label(category))
            .collect();

        assert_eq!(labels, vec!["Добре", "Нейтрально", "Погано"]);
    }

    #[test]
    fn it_falls_back_to_capitalized_keys() {
        let labels: Vec<String> = Category::ALL
            .into_iter()
            .map(|category| Locale::English.option_label(category))
            .collect();

        assert_eq!(labels, vec!["Good", "Neutral", "Bad"]);
    }

    #[test]
    fn it_capitalizes_only_the_first_character() {
        assert_eq!(capitalize("neutral"), "Neutral");
        assert_eq!(capitalize("n"), "N");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn it_parses_locale_codes_and_names() -> TestResult {
        assert_eq!("uk".parse::<Locale>()?, Locale::Ukrainian);
        assert_eq!("Ukrainian".parse::<Locale>()?, Locale::Ukrainian);
        assert_eq!("EN".parse::<Locale>()?, Locale::English);
        assert_eq!("english".parse::<Locale>()?, Locale::English);
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(FeedbackTallyError::UnknownLocale("fr".into()))
        );
        Ok(())
    }

    #[test]
    fn it_round_trips_its_own_codes() -> TestResult {
        for locale in [Locale::Ukrainian, Locale::English] {
            assert_eq!(locale.to_string().parse::<Locale>()?, locale);
        }
        Ok(())
    }
}
