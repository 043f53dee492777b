use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::api::RecipeApi;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod test_support;

use self::application::recipe_service::RecipeService;
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT, MESSAGE_CLEAR_DELAY_MS,
};
use self::domain::models::{ApiRequest, ApiResponse, Focus, Mode, SearchOutcome};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The recipe search screen. Owns its state for as long as it runs.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    recipe_service: Arc<RecipeService>,
    request_sender: Option<Sender<ApiRequest>>,
    response_receiver: Option<Receiver<ApiResponse>>,
    result_limit: u32,
    initial_query: Option<String>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(api: Arc<dyn RecipeApi>, result_limit: u32) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            recipe_service: Arc::new(RecipeService::new(api)),
            request_sender: None,
            response_receiver: None,
            result_limit,
            initial_query: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    /// Pre-fill the input with `query` and search for it as soon as the screen opens.
    pub fn with_initial_query(mut self, query: Option<String>) -> Self {
        self.initial_query = query;
        self
    }

    /// Show recipe details from the result list instead of fetching them.
    pub fn with_offline_details(mut self, offline: bool) -> Self {
        self.state.details.offline = offline;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start();
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    /// Start the API worker and issue the initial search, if any.
    fn start(&mut self) {
        let (tx, rx) = self.start_api_worker();
        self.request_sender = Some(tx);
        self.response_receiver = Some(rx);

        if let Some(query) = self.initial_query.take() {
            self.handle_message(Message::QueryChanged(query));
            self.handle_message(Message::SearchRequested);
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.process_responses();

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_input(key) {
                        info!("Leaving interactive search");
                        break;
                    }
                }
            }

            if self.state.search.is_loading {
                self.renderer.tick();
            }
        }
        Ok(())
    }

    /// Route one key press. Returns `true` when the screen should close.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
            return false;
        }

        // Only the loading indicator is on screen; Esc is the one key it answers to
        if self.state.search.is_loading {
            if key.code == KeyCode::Esc {
                self.handle_message(Message::CancelSearch);
            }
            return false;
        }

        if key.code == KeyCode::F(1) && self.state.mode == Mode::Search {
            self.handle_message(Message::ShowHelp);
            return false;
        }

        let message = match self.state.mode {
            Mode::Search => match self.state.search.focus {
                Focus::Input => {
                    if key.code == KeyCode::Esc {
                        return true;
                    }
                    self.renderer.get_search_bar_mut().handle_key(key)
                }
                Focus::List => {
                    if key.code == KeyCode::Esc {
                        Some(Message::FocusInput)
                    } else {
                        self.renderer.get_result_list_mut().handle_key(key)
                    }
                }
            },
            Mode::RecipeDetails => self.renderer.get_recipe_details_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => self.execute_search(),
            Command::LoadRecipeDetails(recipe_id) => {
                let request = ApiRequest::Details {
                    id: self.state.details.current_request_id,
                    recipe_id,
                };
                self.send_request(request);
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn execute_search(&mut self) {
        let id = self.state.search.current_search_id;
        let request = ApiRequest::Search {
            id,
            query: self.state.search.query.clone(),
            number: self.result_limit,
        };
        if !self.send_request(request) {
            self.handle_message(Message::SearchCompleted {
                id,
                outcome: SearchOutcome::Failure("search worker is not running".to_string()),
            });
        }
    }

    fn send_request(&self, request: ApiRequest) -> bool {
        debug!("Sending request {:?}", request);
        match &self.request_sender {
            Some(sender) => sender.send(request).is_ok(),
            None => {
                warn!("No API worker to handle {:?}", request);
                false
            }
        }
    }

    /// Apply every response that arrived since the last frame.
    fn process_responses(&mut self) {
        let responses: Vec<ApiResponse> = match &self.response_receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return,
        };
        for response in responses {
            self.handle_message(Self::response_message(response));
        }
    }

    fn response_message(response: ApiResponse) -> Message {
        match response {
            ApiResponse::Search { id, outcome } => Message::SearchCompleted { id, outcome },
            ApiResponse::Details {
                id,
                recipe_id,
                outcome,
            } => Message::DetailsLoaded {
                id,
                recipe_id,
                outcome,
            },
        }
    }

    fn start_api_worker(&self) -> (Sender<ApiRequest>, Receiver<ApiResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<ApiRequest>();
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>();
        let recipe_service = self.recipe_service.clone();

        // One thread per request: a cancelled call must not hold up the next one.
        // Late answers still arrive and are dropped by the generation check.
        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let service = recipe_service.clone();
                let tx = response_tx.clone();
                thread::spawn(move || {
                    if tx.send(service.handle(request)).is_err() {
                        debug!("Response dropped, screen already closed");
                    }
                });
            }
            debug!("API worker stopped");
        });

        (request_tx, response_rx)
    }
}
