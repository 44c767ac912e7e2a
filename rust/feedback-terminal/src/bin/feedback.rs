use anyhow::Result;
use clap::Parser;
use feedback_terminal::{FeedbackApp, FeedbackCli, FeedbackState, init_logging};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyEventKind},
};
use tracing::info;

pub fn main() -> Result<()> {
    let cli = FeedbackCli::parse();
    init_logging(cli.log_file.as_deref())?;

    info!(locale = %cli.locale, "Starting feedback session");

    let terminal = ratatui::init();
    let result = run(terminal, FeedbackState::new(cli.locale));
    ratatui::restore();

    let state = result?;
    let tally = state.tally();
    info!(
        total = tally.total(),
        positive_percentage = tally.positive_percentage(),
        "Feedback session ended"
    );

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut state: FeedbackState) -> Result<FeedbackState> {
    terminal.clear()?;

    while !state.exit {
        if state.take_redraw() {
            terminal.draw(|frame| {
                frame.render_stateful_widget(&FeedbackApp {}, frame.area(), &mut state)
            })?;
        }

        match event::read()? {
            // it's important to check that the event is a key press event as
            // crossterm also emits key release and repeat events on Windows.
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                state.handle_key_event(key_event)
            }
            Event::Resize(..) => state.request_redraw(),
            _ => {}
        };
    }

    Ok(state)
}
