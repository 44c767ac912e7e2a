use ratatui::prelude::*;

/// Informational message shown in place of the statistics panel.
pub struct EmptyNotice {
    /// Text to show
    pub message: &'static str,
}

impl Widget for EmptyNotice {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Line::raw(self.message).dark_gray().render(area, buf);
    }
}
