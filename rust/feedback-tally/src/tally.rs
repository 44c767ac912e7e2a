use tracing::debug;

use crate::Category;

/// Per-category feedback counts for a single session.
///
/// Counts start at zero and only ever grow by one at a time through
/// [`FeedbackTally::record`]. The total and the positive percentage are
/// derived on demand and never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTally {
    counts: [u64; Category::COUNT],
}

impl FeedbackTally {
    /// Records one piece of feedback for `category`.
    pub fn record(&mut self, category: Category) {
        let count = &mut self.counts[category.index()];
        *count = count.saturating_add(1);

        debug!(%category, count = *count, "Recorded feedback");
    }

    /// Records one piece of feedback for the category named by `key`.
    ///
    /// Keys outside the fixed category set leave the tally untouched and
    /// yield `None`.
    pub fn record_key(&mut self, key: &str) -> Option<Category> {
        match key.parse::<Category>() {
            Ok(category) => {
                self.record(category);
                Some(category)
            }
            Err(error) => {
                debug!(%error, "Ignoring feedback");
                None
            }
        }
    }

    /// The number of times `category` has been recorded
    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// Every category paired with its count, in display order
    pub fn counts(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
    }

    /// Sum of all category counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of [`Category::Good`] in the total, as a whole percentage.
    ///
    /// Halves round up. An empty tally yields zero.
    pub fn positive_percentage(&self) -> u8 {
        let total = self.total() as u128;
        if total == 0 {
            return 0;
        }

        let good = self.count(Category::Good) as u128;
        // good <= total, so the quotient is at most 100
        ((200 * good + total) / (2 * total)) as u8
    }

    /// A snapshot of the five displayed numbers
    pub fn summary(&self) -> TallySummary {
        TallySummary {
            good: self.count(Category::Good),
            neutral: self.count(Category::Neutral),
            bad: self.count(Category::Bad),
            total: self.total(),
            positive_percentage: self.positive_percentage(),
        }
    }

    /// Which of the two views a front end should show for this tally
    pub fn display_state(&self) -> DisplayState {
        if self.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Statistics(self.summary())
        }
    }
}

/// The values shown by the statistics panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TallySummary {
    /// Count of [`Category::Good`]
    pub good: u64,
    /// Count of [`Category::Neutral`]
    pub neutral: u64,
    /// Count of [`Category::Bad`]
    pub bad: u64,
    /// Sum of the three counts
    pub total: u64,
    /// Share of good feedback, in `0..=100`
    pub positive_percentage: u8,
}

impl TallySummary {
    /// The count for `category`
    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Good => self.good,
            Category::Neutral => self.neutral,
            Category::Bad => self.bad,
        }
    }
}

/// The two observable display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing recorded; the empty notice is shown
    Empty,
    /// At least one recording; the statistics panel is shown
    Statistics(TallySummary),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tally_of(categories: &[Category]) -> FeedbackTally {
        let mut tally = FeedbackTally::default();
        for category in categories {
            tally.record(*category);
        }
        tally
    }

    #[test]
    fn it_starts_empty() {
        let tally = FeedbackTally::default();

        assert_eq!(tally.total(), 0);
        assert_eq!(tally.positive_percentage(), 0);
        assert!(tally.counts().all(|(_, count)| count == 0));
        assert_eq!(tally.display_state(), DisplayState::Empty);
    }

    #[test]
    fn it_reports_full_positive_share_for_a_single_good_pick() {
        let tally = tally_of(&[Category::Good]);

        assert_eq!(tally.total(), 1);
        assert_eq!(tally.positive_percentage(), 100);
    }

    #[test]
    fn it_rounds_one_of_each_down_to_33() {
        let tally = tally_of(&[Category::Good, Category::Neutral, Category::Bad]);

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.positive_percentage(), 33);
    }

    #[test]
    fn it_splits_two_good_and_two_bad_evenly() {
        let tally = tally_of(&[Category::Good, Category::Bad, Category::Good, Category::Bad]);

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.count(Category::Neutral), 0);
        assert_eq!(tally.positive_percentage(), 50);
    }

    #[test]
    fn it_rounds_halves_up() {
        // 1 / 8 = 12.5%
        let mut categories = vec![Category::Bad; 7];
        categories.push(Category::Good);
        assert_eq!(tally_of(&categories).positive_percentage(), 13);

        // 57 / 200 = 28.5%
        let mut categories = vec![Category::Good; 57];
        categories.extend(vec![Category::Neutral; 143]);
        assert_eq!(tally_of(&categories).positive_percentage(), 29);

        // 2 / 3 = 66.67%
        let tally = tally_of(&[Category::Good, Category::Good, Category::Bad]);
        assert_eq!(tally.positive_percentage(), 67);
    }

    #[test]
    fn it_reports_zero_positive_share_without_good_picks() {
        let tally = tally_of(&[Category::Neutral, Category::Bad]);

        assert_eq!(tally.positive_percentage(), 0);
    }

    #[test]
    fn it_ignores_unknown_keys() {
        let mut tally = tally_of(&[Category::Neutral]);
        let before = tally;

        assert_eq!(tally.record_key("excellent"), None);
        assert_eq!(tally.record_key(""), None);
        assert_eq!(tally, before);
    }

    #[test]
    fn it_records_known_keys() {
        let mut tally = FeedbackTally::default();

        assert_eq!(tally.record_key("bad"), Some(Category::Bad));
        assert_eq!(tally.record_key("good"), Some(Category::Good));
        assert_eq!(tally.count(Category::Bad), 1);
        assert_eq!(tally.count(Category::Good), 1);
    }

    #[test]
    fn it_summarizes_the_displayed_numbers() {
        let tally = tally_of(&[Category::Good, Category::Good, Category::Neutral]);

        assert_eq!(
            tally.display_state(),
            DisplayState::Statistics(TallySummary {
                good: 2,
                neutral: 1,
                bad: 0,
                total: 3,
                positive_percentage: 67,
            })
        );
    }
}
