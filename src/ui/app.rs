use crate::api::CoinlayerClient;
use crate::config::Config;
use crate::dashboard::{
    load_default, load_names, load_random, load_search, CardGrid, CryptoSummary, DashboardMode,
    LoadError,
};
use crate::data::{Crypto, CryptoNameList};
use crate::ui::dialogs::HelpOverlay;
use crate::ui::input::{InputMode, InputState, Page};
use crate::ui::views::{DashboardView, SearchView, ViewRenderer, ViewState};
use crate::ui::widgets::{StatusMessage, StatusWidget};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Results of background fetches, drained once per frame
enum DataEvent {
    Names(Result<CryptoNameList, LoadError>),
    Dashboard {
        request: u64,
        mode: DashboardMode,
        result: Result<Vec<Crypto>, LoadError>,
    },
    Searched {
        request: u64,
        result: Result<Crypto, LoadError>,
    },
}

pub struct App {
    config: Config,
    client: Arc<CoinlayerClient>,
    grid: CardGrid,
    input: InputState,
    mode: DashboardMode,
    rows: Vec<Vec<CryptoSummary>>,
    updated_at: Option<String>,
    names: Option<CryptoNameList>,
    searched: Option<CryptoSummary>,
    /// Fetches still in flight
    pending: usize,
    message: Option<StatusMessage>,
    /// Search to run once the symbol list arrives
    queued_symbol: Option<String>,
    /// Id of the newest dashboard and search fetch; older results are dropped
    dashboard_request: u64,
    search_request: u64,
    should_quit: bool,
    event_tx: mpsc::UnboundedSender<DataEvent>,
    event_rx: mpsc::UnboundedReceiver<DataEvent>,
}

impl App {
    pub fn new(config: Config, page: Page, symbol: Option<String>) -> Result<Self> {
        let client = Arc::new(CoinlayerClient::new(&config.coinlayer)?);
        let grid = CardGrid::new(config.dashboard.cards_per_row)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            client,
            grid,
            input: InputState::new(page),
            mode: DashboardMode::Default,
            rows: Vec::new(),
            updated_at: None,
            names: None,
            searched: None,
            pending: 0,
            message: None,
            queued_symbol: symbol.map(|s| s.trim().to_uppercase()),
            dashboard_request: 0,
            search_request: 0,
            should_quit: false,
            event_tx,
            event_rx,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !self.config.has_api_key() {
            self.message = Some(StatusMessage::error(
                "No coinlayer API key set (CRYPTOECONOMY_COINLAYER__API_KEY)",
            ));
        }
        self.spawn_names();
        self.spawn_dashboard(DashboardMode::Default);

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        loop {
            while let Ok(event) = self.event_rx.try_recv() {
                self.handle_data_event(event);
            }

            terminal.draw(|f| self.draw(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn spawn_names(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        self.pending += 1;
        tokio::spawn(async move {
            let result = load_names(&client).await;
            let _ = tx.send(DataEvent::Names(result));
        });
    }

    fn spawn_dashboard(&mut self, mode: DashboardMode) {
        let names = match (mode, &self.names) {
            (DashboardMode::Random, None) => {
                self.message = Some(StatusMessage::error(
                    "Symbol list not loaded yet, cannot pick random cryptos",
                ));
                return;
            }
            (DashboardMode::Random, Some(names)) => Some(names.clone()),
            (DashboardMode::Default, _) => None,
        };

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let symbols = self.config.dashboard.default_symbols.clone();
        let count = self.config.dashboard.random_count;
        self.dashboard_request += 1;
        let request = self.dashboard_request;
        self.pending += 1;
        info!("Loading {} dashboard", mode.label());

        tokio::spawn(async move {
            let result = match (mode, names) {
                (DashboardMode::Random, Some(names)) => {
                    let mut rng = StdRng::from_entropy();
                    load_random(&client, &names, count, &mut rng).await
                }
                _ => load_default(&client, &symbols).await,
            };
            let _ = tx.send(DataEvent::Dashboard {
                request,
                mode,
                result,
            });
        });
    }

    fn spawn_search(&mut self, symbol: String) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let days = self.config.dashboard.history_days;
        self.search_request += 1;
        let request = self.search_request;
        self.pending += 1;
        self.message = Some(StatusMessage::info(format!("Searching {}...", symbol)));
        info!("Searching {}", symbol);

        tokio::spawn(async move {
            let result = load_search(&client, &symbol, days).await;
            let _ = tx.send(DataEvent::Searched { request, result });
        });
    }

    fn handle_data_event(&mut self, event: DataEvent) {
        self.pending = self.pending.saturating_sub(1);

        let stale = match &event {
            DataEvent::Names(_) => false,
            DataEvent::Dashboard { request, .. } => *request != self.dashboard_request,
            DataEvent::Searched { request, .. } => *request != self.search_request,
        };
        if stale {
            debug!("Dropping result of a superseded fetch");
            return;
        }

        match event {
            DataEvent::Names(Ok(names)) => {
                self.input.update_search(Some(&names));
                self.names = Some(names);
                if let Some(symbol) = self.queued_symbol.take() {
                    self.select_symbol(&symbol);
                    self.spawn_search(symbol);
                }
            }
            DataEvent::Dashboard {
                mode,
                result: Ok(cryptos),
                ..
            } => match self.grid.rows(&cryptos) {
                Ok(rows) => {
                    self.rows = rows
                        .into_iter()
                        .map(|row| row.iter().map(CryptoSummary::from).collect())
                        .collect();
                    self.mode = mode;
                    self.updated_at =
                        Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
                    self.message = Some(StatusMessage::info(format!(
                        "{} dashboard updated",
                        mode.label()
                    )));
                }
                Err(e) => self.report(LoadError::from(e)),
            },
            DataEvent::Searched {
                result: Ok(crypto), ..
            } => {
                self.message = Some(StatusMessage::info(format!("Loaded {}", crypto.symbol)));
                self.searched = Some(CryptoSummary::from(&crypto));
            }
            DataEvent::Names(Err(e))
            | DataEvent::Dashboard { result: Err(e), .. }
            | DataEvent::Searched { result: Err(e), .. } => self.report(e),
        }
    }

    fn report(&mut self, err: LoadError) {
        error!("Fetch failed: {}", err);
        self.message = Some(StatusMessage::error(err.to_string()));
    }

    /// Put the cursor on `symbol` if the filtered list has it
    fn select_symbol(&mut self, symbol: &str) {
        let Some(names) = &self.names else {
            return;
        };
        if let Some(pos) = self
            .input
            .filtered
            .iter()
            .position(|&i| names.names().get(i).is_some_and(|s| s == symbol))
        {
            self.input.cursor = pos;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.input.mode {
            InputMode::Help => self.input.close_help(),
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input.exit_search(),
            KeyCode::Enter => {
                self.input.exit_search();
                self.search_selected();
            }
            KeyCode::Backspace => self.input.pop_char(self.names.as_ref()),
            KeyCode::Down => self.input.cursor_down(),
            KeyCode::Up => self.input.cursor_up(),
            KeyCode::Char(c) => self.input.push_char(c, self.names.as_ref()),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.input.show_help(),
            KeyCode::Char('1') => self.input.set_page(Page::Dashboard),
            KeyCode::Char('2') => self.input.set_page(Page::Search),
            KeyCode::Tab => self.input.set_page(self.input.page.toggle()),
            KeyCode::Char('/') => self.input.enter_search(),
            KeyCode::Char('d') if self.input.page == Page::Dashboard => {
                self.spawn_dashboard(DashboardMode::Default)
            }
            KeyCode::Char('r') if self.input.page == Page::Dashboard => {
                self.spawn_dashboard(DashboardMode::Random)
            }
            KeyCode::Down if self.input.page == Page::Search => self.input.cursor_down(),
            KeyCode::Up if self.input.page == Page::Search => self.input.cursor_up(),
            KeyCode::Enter if self.input.page == Page::Search => self.search_selected(),
            _ => {}
        }
    }

    fn search_selected(&mut self) {
        let selected = self
            .names
            .as_ref()
            .and_then(|names| self.input.selected(names))
            .map(str::to_string);
        match selected {
            Some(symbol) => self.spawn_search(symbol),
            None => self.message = Some(StatusMessage::error("No symbol selected")),
        }
    }

    fn draw(&self, f: &mut ratatui::Frame) {
        let size = f.area();

        // Main layout: status bar + page
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10)])
            .split(size);

        f.render_widget(
            StatusWidget::new(self.input.page, self.pending > 0, self.message.as_ref()),
            chunks[0],
        );

        let state = ViewState {
            mode: self.mode,
            rows: &self.rows,
            updated_at: self.updated_at.as_deref(),
            names: self.names.as_ref(),
            input: &self.input,
            searched: self.searched.as_ref(),
            loading: self.pending > 0,
        };
        match self.input.page {
            Page::Dashboard => DashboardView::new().render(f, chunks[1], &state),
            Page::Search => SearchView::new().render(f, chunks[1], &state),
        }

        if self.input.is_help() {
            f.render_widget(HelpOverlay::new(), size);
        }
    }
}
