//! Interactive details screen.

use std::io::{Stdout, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use client::{ClientError, EmployeeManagerClient, FileSaver};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use record::EmployeeRecord;
use tokio::sync::mpsc;
use view::{EmployeePage, FetchTicket, PageState, project};

use crate::ui;

/// Events sent from background fetches to the screen loop.
enum AppEvent {
    Resolved(FetchTicket, EmployeeRecord),
    FetchFailed(FetchTicket, ClientError),
}

/// Screen state plus the handles background work needs.
struct App {
    page: EmployeePage,
    selected: usize,
    tick: usize,
    client: EmployeeManagerClient,
    saver: Arc<dyn FileSaver>,
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    fn new(client: EmployeeManagerClient, saver: Arc<dyn FileSaver>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(16);
        Self {
            page: EmployeePage::new(),
            selected: 0,
            tick: 0,
            client,
            saver,
            event_rx,
            event_tx,
        }
    }

    /// Starts a fetch when the page accepts the id. Repeating the current
    /// id is a no-op.
    fn start_fetch(&mut self, employee_id: &str) {
        let Some(ticket) = self.page.set_employee_id(employee_id) else {
            return;
        };
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let employee_id = employee_id.to_owned();
        tokio::spawn(async move {
            match client.fetch_employee(&employee_id).await {
                Ok(record) => {
                    let _ = tx.send(AppEvent::Resolved(ticket, record)).await;
                }
                Err(error) => {
                    let _ = tx.send(AppEvent::FetchFailed(ticket, error)).await;
                }
            }
        });
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Resolved(ticket, record) => {
                if self.page.resolve(ticket, project(&record)) {
                    self.selected = 0;
                }
            }
            AppEvent::FetchFailed(ticket, error) => {
                // Failures only reach the log; the screen stays on the
                // loading state.
                if self.page.fail(ticket) {
                    tracing::error!(%error, "employee fetch failed");
                }
            }
        }
    }

    fn attachment_count(&self) -> usize {
        match self.page.state() {
            PageState::Loaded(view) => view.attachments.len(),
            PageState::Loading => 0,
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.attachment_count() {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Kicks off a download of the selected attachment. The screen gives
    /// no feedback; outcomes go to the log.
    fn download_selected(&self) {
        let PageState::Loaded(view) = self.page.state() else {
            return;
        };
        let Some(attachment) = view.attachments.get(self.selected) else {
            return;
        };
        let saver = self.saver.clone();
        let reference = attachment.reference.clone();
        let label = attachment.label;
        tokio::spawn(async move {
            match saver.save(&reference, label).await {
                Ok(path) => {
                    tracing::info!(label, path = %path.display(), "document saved");
                }
                Err(error) => {
                    tracing::error!(label, %error, "document download failed");
                }
            }
        });
    }
}

/// Runs the details screen until the user quits.
pub async fn run(
    client: EmployeeManagerClient,
    saver: Arc<dyn FileSaver>,
    employee_id: &str,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, client, saver, employee_id).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: EmployeeManagerClient,
    saver: Arc<dyn FileSaver>,
    employee_id: &str,
) -> Result<()> {
    let mut app = App::new(client, saver);
    app.start_fetch(employee_id);

    let tick_rate = Duration::from_millis(50);
    loop {
        terminal.draw(|f| ui::draw(f, app.page.state(), app.selected, app.tick))?;
        app.tick = app.tick.wrapping_add(1);

        while let Ok(event) = app.event_rx.try_recv() {
            app.apply(event);
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                        KeyCode::Enter | KeyCode::Char('d') => app.download_selected(),
                        _ => {}
                    }
                }
            }
        }
    }
}
