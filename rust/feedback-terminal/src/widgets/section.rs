use ratatui::{prelude::*, widgets::Block};

/// A bordered region with a bold title wrapping another widget.
pub struct Section<W> {
    /// Title drawn on the top border
    pub title: &'static str,
    /// Widget drawn inside the border
    pub body: W,
}

impl<W: Widget> Widget for Section<W> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().title(Line::from(self.title).bold());
        let inner = block.inner(area);

        block.render(area, buf);
        self.body.render(inner, buf);
    }
}
