use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crossterm::event;
use ratatui::prelude::*;

use crate::app::actions::{ActionResult, apply_action};
use crate::app::background::LoadEvent;
use crate::app::events::handle_event;
use crate::infra::constants::EVENT_POLL_MS;
use crate::state::State;
use crate::ui;

pub struct App {
    pub state: State,
    /// Dataset loader channel; dropped once the single event arrived
    load_rx: Option<Receiver<LoadEvent>>,
}

impl App {
    pub fn new(state: State, load_rx: Receiver<LoadEvent>) -> Self {
        Self { state, load_rx: Some(load_rx) }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            self.process_load_events();

            if self.state.dirty {
                terminal.draw(|frame| ui::render(frame, &self.state))?;
                self.state.dirty = false;
            }

            if !event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                continue;
            }
            let evt = event::read()?;
            let Some(action) = handle_event(&evt, &self.state) else {
                log::info!("quit with {}", self.state.share_url());
                break;
            };
            if let ActionResult::ShareChanged = apply_action(&mut self.state, action) {
                log::debug!("share link: {}", self.state.share_url());
            }
            if matches!(evt, event::Event::Resize(_, _)) {
                self.state.dirty = true;
            }
        }
        Ok(())
    }

    /// Apply the loader's result if it has arrived. Controls stay live meanwhile.
    pub fn process_load_events(&mut self) {
        let Some(rx) = self.load_rx.as_ref() else {
            return;
        };
        match rx.try_recv() {
            Ok(LoadEvent::Loaded(dataset)) => {
                log::info!("dataset loaded: {} dishes", dataset.len());
                self.state.set_dataset(dataset);
                self.load_rx = None;
            }
            Ok(LoadEvent::Failed(err)) => {
                log::error!("dataset load failed: {}", err);
                self.state.set_load_failed(err);
                self.load_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("dataset loader exited without a result");
                self.state.set_load_failed("loader exited".to_string());
                self.load_rx = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadStatus;
    use crate::state::runtime::tests::{DATA, state_with};
    use rl_base::dataset::Dataset;
    use std::sync::mpsc;

    #[test]
    fn load_event_applies_dataset() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(state_with("s=abcd&a=2"), rx);
        app.process_load_events();
        assert_eq!(app.state.load_status, LoadStatus::Loading);

        tx.send(LoadEvent::Loaded(Dataset::parse(DATA))).unwrap();
        app.process_load_events();
        assert_eq!(app.state.load_status, LoadStatus::Ready { dishes: 4 });
        assert_eq!(app.state.choices.len(), 2);
    }

    #[test]
    fn load_failure_is_surfaced() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(state_with("a=1"), rx);
        tx.send(LoadEvent::Failed("HTTP error: 404".into())).unwrap();
        app.process_load_events();
        assert_eq!(app.state.load_status, LoadStatus::Failed("HTTP error: 404".into()));
        assert!(app.state.choices.is_empty());
    }

    #[test]
    fn dropped_loader_is_a_failure() {
        let (tx, rx) = mpsc::channel::<LoadEvent>();
        drop(tx);
        let mut app = App::new(state_with(""), rx);
        app.process_load_events();
        assert!(matches!(app.state.load_status, LoadStatus::Failed(_)));
    }
}
