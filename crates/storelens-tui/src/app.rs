//! Application core — event loop, fetch status, action dispatch.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use storelens_api::CatalogClient;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::fetch;
use crate::screens::browse::BrowseScreen;
use crate::theme;
use crate::tui::Tui;

/// Where the one-shot startup fetch currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Top-level application state and event loop.
pub struct App {
    /// The single browse screen.
    browse: BrowseScreen,
    /// Whether the app should keep running.
    running: bool,
    /// Startup fetch status shown in the status bar.
    fetch_status: FetchStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Search overlay visibility.
    search_active: bool,
    /// Current search query.
    search_query: String,
    /// Loading spinner state, advanced on Tick.
    throbber_state: throbber_widgets_tui::ThrobberState,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Catalog client for the startup fetch.
    client: CatalogClient,
    /// Cancellation token for the fetch task.
    fetch_cancel: CancellationToken,
}

impl App {
    pub fn new(client: CatalogClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            browse: BrowseScreen::new(),
            running: true,
            fetch_status: FetchStatus::default(),
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            action_tx,
            action_rx,
            client,
            fetch_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.browse.init(self.action_tx.clone())?;
        self.browse.set_focused(true);

        // Kick off the one-shot catalog fetch in the background.
        tokio::spawn(fetch::load_catalog(
            self.client.clone(),
            self.action_tx.clone(),
            self.fetch_cancel.clone(),
        ));

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Cancel the fetch task and clean up
        self.fetch_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else is delegated to the browse screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Search overlay captures all input
        if self.search_active {
            return match key.code {
                KeyCode::Esc => {
                    self.search_query.clear();
                    Ok(Some(Action::CloseSearch))
                }
                KeyCode::Enter => Ok(Some(Action::SearchSubmit)),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                _ => Ok(None),
            };
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Help
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Search
            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),

            _ => {}
        }

        // Delegate to the browse screen
        self.browse.handle_key_event(key)
    }

    /// Handle mouse events (delegate to the browse screen).
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.browse.handle_mouse_event(mouse)
    }

    /// Process a single action — update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Tick => {
                if self.fetch_status == FetchStatus::Loading {
                    self.throbber_state.calc_next();
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenSearch => {
                self.search_active = true;
                self.search_query.clear();
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search_query.clear();
                if let Some(follow_up) = self.browse.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            Action::SearchSubmit => {
                // The live query already filtered the grid; just close
                // the overlay, keeping the term in the criteria.
                self.search_active = false;
            }

            Action::CatalogLoaded { .. } => {
                debug!("catalog loaded, switching to browse");
                self.fetch_status = FetchStatus::Loaded;
                if let Some(follow_up) = self.browse.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            Action::FetchFailed(message) => {
                self.fetch_status = FetchStatus::Failed(message.clone());
            }

            Action::Render | Action::Resize(..) => {}

            // Everything else goes to the browse screen
            other => {
                if let Some(follow_up) = self.browse.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        match &self.fetch_status {
            FetchStatus::Loaded => self.browse.render(frame, layout[0]),
            FetchStatus::Loading => Self::render_placeholder(
                frame,
                layout[0],
                "Fetching the catalog\u{2026}",
                theme::NEON_CYAN,
            ),
            FetchStatus::Failed(message) => Self::render_placeholder(
                frame,
                layout[0],
                &format!("Catalog fetch failed: {message}"),
                theme::ERROR_RED,
            ),
        }

        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Centered single-line panel for the loading and failure states.
    fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let y = inner.y + inner.height / 2;
        let line = Paragraph::new(Line::from(Span::styled(
            text.to_owned(),
            Style::default().fg(color),
        )))
        .centered();
        frame.render_widget(line, Rect::new(inner.x, y, inner.width, 1));
    }

    /// Render the bottom status bar with fetch status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::ELECTRIC_PURPLE)),
                Span::styled(&self.search_query, Style::default().fg(theme::NEON_CYAN)),
                Span::styled("█", Style::default().fg(theme::NEON_CYAN)),
                Span::styled("  Esc cancel  Enter submit", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let status = match &self.fetch_status {
            FetchStatus::Loading => {
                let throbber = throbber_widgets_tui::Throbber::default()
                    .label("loading catalog")
                    .style(Style::default().fg(theme::ELECTRIC_YELLOW))
                    .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
                frame.render_stateful_widget(
                    throbber,
                    Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1),
                    &mut self.throbber_state.clone(),
                );
                return;
            }
            FetchStatus::Loaded => {
                Span::styled("● catalog loaded", Style::default().fg(theme::SUCCESS_GREEN))
            }
            FetchStatus::Failed(_) => {
                Span::styled("○ fetch failed", Style::default().fg(theme::ERROR_RED))
            }
        };

        let hints = Span::styled(" │ ? help  / search  q quit", theme::key_hint());

        let line = Line::from(vec![Span::raw(" "), status, hints]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self, clippy::too_many_lines)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 60u16.min(area.width.saturating_sub(4));
        let help_height = 22u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let help_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Navigation",
                Style::default().fg(theme::NEON_CYAN),
            )]),
            Line::from(Span::styled("  ─────────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  h/j/k/l  ", theme::key_hint_key()),
                Span::styled("Move between cards", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  g/G      ", theme::key_hint_key()),
                Span::styled("First / last card", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Enter    ", theme::key_hint_key()),
                Span::styled("Open product detail", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  Esc      ", theme::key_hint_key()),
                Span::styled("Close detail / overlay", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Filters & Sort",
                Style::default().fg(theme::NEON_CYAN),
            )]),
            Line::from(Span::styled("  ──────────────", theme::key_hint())),
            Line::from(vec![
                Span::styled("  Tab      ", theme::key_hint_key()),
                Span::styled("Cycle category", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  /        ", theme::key_hint_key()),
                Span::styled("Search titles", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  +/-      ", theme::key_hint_key()),
                Span::styled("Minimum rating (0.1 steps)", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  [/] {/}  ", theme::key_hint_key()),
                Span::styled("Price bounds ($50 steps)", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  s        ", theme::key_hint_key()),
                Span::styled("Cycle sort mode", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  c        ", theme::key_hint_key()),
                Span::styled("Clear all filters", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  q        ", theme::key_hint_key()),
                Span::styled("Quit", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "                         Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        let paragraph = Paragraph::new(help_text);
        frame.render_widget(paragraph, inner);
    }
}
