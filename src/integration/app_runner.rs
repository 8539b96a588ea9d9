use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        msg::Msg,
        state::{text_box::TextSurface, ui::KeyHitMap, AppState},
        translator::{translate, TranslationContext},
        update::update,
    },
    domain::Language,
    infrastructure::{
        config::{Config, KeyBindings},
        storage::LanguageStore,
        tui::{event_source::EventSource, Event, Frame, TuiLike},
    },
    presentation::components::Components,
};

/// Drives the application: terminal events in, state updates, commands and
/// frames out.
pub struct AppRunner {
    state: AppState,
    keybindings: KeyBindings,
    executor: CmdExecutor,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    components: Components,
    output_rx: mpsc::UnboundedReceiver<String>,
    last_output: Option<String>,
}

impl AppRunner {
    /// Builds a runner reading events from `tui`.
    ///
    /// `language` is the language to start in, usually loaded from `store`.
    pub fn new(
        config: &Config,
        initial_text: impl Into<String>,
        language: Language,
        store: Box<dyn LanguageStore>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Self {
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        let state = AppState::new(initial_text, language, config.keyboard.key_options())
            .with_output(output_tx);

        Self {
            state,
            keybindings: config.keybindings.clone(),
            executor: CmdExecutor::new(store),
            events: EventSource::real(Arc::clone(&tui)),
            tui,
            components: Components::new(),
            output_rx,
            last_output: None,
        }
    }

    /// Replaces the event source, e.g. with a scripted queue in tests.
    pub fn with_event_source(mut self, events: EventSource) -> Self {
        self.events = events;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.executor
    }

    /// Current contents of the text box
    pub fn text(&self) -> &str {
        self.state.text_box.value()
    }

    /// Last text delivered through the editor's input callback
    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    /// Runs until a quit message or until the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        while self.run_one_cycle().await? {}
        self.tui.lock().await.exit()?;
        tracing::info!(chars = self.text().chars().count(), "exiting");
        Ok(())
    }

    /// Enters the terminal, opens the editor on the initial text and draws
    /// the first frame.
    pub async fn start(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            self.state.ui.reports_key_release = tui.reports_key_release();
        }
        self.dispatch(Msg::Open);
        self.render().await
    }

    /// Handles a single event. Returns `false` once the app should stop.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.events.next().await else {
            return Ok(false);
        };
        self.handle_event(event).await?;
        Ok(!self.state.system.should_quit)
    }

    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Resize(width, height) = event {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }

        let msgs = {
            let ctx = TranslationContext {
                keybindings: &self.keybindings,
                hit_map: &self.state.ui.hit_map,
                reports_key_release: self.state.ui.reports_key_release,
            };
            translate(&event, &ctx)
        };
        for msg in msgs {
            self.dispatch(msg);
        }
        self.drain_output();

        if self.state.system.should_quit {
            return Ok(());
        }
        self.render().await
    }

    /// Runs `msg` through `update`, executing commands and feeding their
    /// resulting messages back until the queue is empty.
    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, commands) = update(msg, state);
            self.state = state;
            queue.extend(self.executor.execute_commands(&commands));
        }
    }

    fn drain_output(&mut self) {
        while let Ok(text) = self.output_rx.try_recv() {
            tracing::trace!(chars = text.chars().count(), "text updated");
            self.last_output = Some(text);
        }
    }

    async fn render(&mut self) -> Result<()> {
        let mut hit_map = KeyHitMap::default();
        {
            let state = &self.state;
            let components = &self.components;
            let mut tui = self.tui.lock().await;
            tui.draw(&mut |frame: &mut Frame<'_>| {
                hit_map = components.render(frame, state);
            })?;
        }
        self.state.ui.hit_map = hit_map;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::{storage::MemoryStore, tui::test::TestTui};

    fn runner(events: impl IntoIterator<Item = Event>) -> AppRunner {
        let config = Config::defaults().expect("default config");
        let tui = TestTui::with_events(100, 30, events).expect("test tui");
        AppRunner::new(
            &config,
            "",
            Language::En,
            Box::new(MemoryStore::default()),
            Arc::new(Mutex::new(tui)),
        )
    }

    #[tokio::test]
    async fn test_run_types_and_quits() {
        let mut runner = runner([
            Event::Key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        ]);

        runner.run().await.expect("run");

        assert_eq!(runner.text(), "hi");
        assert_eq!(runner.last_output(), Some("hi"));
        assert!(runner.state().system.should_quit);
    }

    #[tokio::test]
    async fn test_start_fills_hit_map() {
        let mut runner = runner([]);
        runner.start().await.expect("start");
        assert!(!runner.state().ui.hit_map.is_empty());
    }

    #[tokio::test]
    async fn test_scripted_event_source() {
        let mut runner =
            runner([]).with_event_source(EventSource::test([Event::Paste("ačiū".to_owned())]));
        runner.start().await.expect("start");

        assert!(runner.run_one_cycle().await.expect("cycle"));
        assert_eq!(runner.text(), "ačiū");
        assert!(!runner.run_one_cycle().await.expect("cycle"));
    }
}
