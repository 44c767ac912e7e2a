use std::{fmt, str::FromStr};

use crate::FeedbackTallyError;

/// One of the fixed feedback classifications a user can pick.
///
/// The set is closed: every lookup keyed by category is an exhaustive
/// `match`, so adding a variant is a compile error everywhere a label,
/// colour or marker is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Favorable feedback
    Good,
    /// Neither favorable nor unfavorable
    Neutral,
    /// Unfavorable feedback
    Bad,
}

impl Category {
    /// Number of categories
    pub const COUNT: usize = 3;

    /// All categories, in the order controls and statistics are displayed
    pub const ALL: [Category; Category::COUNT] = [Category::Good, Category::Neutral, Category::Bad];

    /// The stable string key for this category
    pub fn key(self) -> &'static str {
        match self {
            Category::Good => "good",
            Category::Neutral => "neutral",
            Category::Bad => "bad",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        match self {
            Category::Good => 0,
            Category::Neutral => 1,
            Category::Bad => 2,
        }
    }

    /// The category at `index` in [`Category::ALL`], if any
    pub fn from_index(index: usize) -> Option<Self> {
        Category::ALL.get(index).copied()
    }

    /// The category displayed after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            Category::Good => Category::Neutral,
            Category::Neutral => Category::Bad,
            Category::Bad => Category::Good,
        }
    }

    /// The category displayed before this one, wrapping around
    pub fn previous(self) -> Self {
        match self {
            Category::Good => Category::Bad,
            Category::Neutral => Category::Good,
            Category::Bad => Category::Neutral,
        }
    }

    /// Emoji shown in front of this category's statistic line
    pub fn marker(self) -> &'static str {
        match self {
            Category::Good => "🟢",
            Category::Neutral => "🟡",
            Category::Bad => "🔴",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = FeedbackTallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| FeedbackTallyError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn it_parses_every_key_it_prints() -> TestResult {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>()?, category);
        }
        Ok(())
    }

    #[test]
    fn it_rejects_keys_outside_the_fixed_set() {
        assert_eq!(
            "excellent".parse::<Category>(),
            Err(FeedbackTallyError::UnknownCategory("excellent".into()))
        );
        // Keys are matched exactly.
        assert!("Good".parse::<Category>().is_err());
        assert!(" good".parse::<Category>().is_err());
    }

    #[test]
    fn it_keeps_index_and_display_order_in_sync() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), position);
            assert_eq!(Category::from_index(position), Some(category));
        }
        assert_eq!(Category::from_index(Category::COUNT), None);
    }

    #[test]
    fn it_cycles_through_the_display_order() {
        let mut forward = vec![Category::Good];
        let mut backward = vec![Category::Good];
        for _ in 0..Category::COUNT {
            forward.push(forward.last().unwrap().next());
            backward.push(backward.last().unwrap().previous());
        }

        assert_eq!(
            forward,
            vec![Category::Good, Category::Neutral, Category::Bad, Category::Good]
        );
        assert_eq!(
            backward,
            vec![Category::Good, Category::Bad, Category::Neutral, Category::Good]
        );
    }
}
