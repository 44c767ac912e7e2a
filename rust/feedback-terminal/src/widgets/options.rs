use feedback_tally::{Category, Locale};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

/// Row of activation controls, one per category.
///
/// Each control shows its key number and label on the category's colour.
/// The control under the cursor gets a thick, bold border.
pub struct OptionBar {
    /// Label table for the captions
    pub locale: Locale,
    /// Control under the cursor
    pub selected: Category,
}

/// Background colour of `category`'s control.
pub fn option_color(category: Category) -> Color {
    match category {
        Category::Good => Color::Green,
        Category::Neutral => Color::Yellow,
        Category::Bad => Color::Red,
    }
}

impl Widget for OptionBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::horizontal([Constraint::Fill(1); Category::COUNT]).spacing(1);
        let areas: [Rect; Category::COUNT] = layout.areas(area);

        for (category, area) in Category::ALL.into_iter().zip(areas) {
            let selected = category == self.selected;

            let block = if selected {
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(Style::new().bold())
            } else {
                Block::bordered()
            };

            let caption = format!("{} {}", category.index() + 1, self.locale.option_label(category));
            let style = Style::new().fg(Color::White).bg(option_color(category));
            let style = if selected { style.bold() } else { style };

            Paragraph::new(caption)
                .alignment(Alignment::Center)
                .style(style)
                .block(block)
                .render(area, buf);
        }
    }
}
