use holodex::api::SwapiClient;
use holodex::app::App;
use holodex::cli::{parse_args, CliCommand, CliOverrides};
use holodex::config::Config;
use holodex::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use holodex::{logging, ui};

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    terminal::enable_raw_mode,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interval of the animation tick driving spinners.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("holodex {}", VERSION);
            Ok(())
        }
        CliCommand::RunTui(overrides) => run_tui(overrides).await,
    }
}

async fn run_tui(overrides: CliOverrides) -> Result<()> {
    // Logging is best-effort; the TUI runs fine without it
    logging::init();

    let mut config = Config::from_env();
    if let Some(endpoint) = overrides.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(page_size) = overrides.page_size {
        config = config.with_page_size(page_size);
    }

    // Install the panic hook before touching the terminal so a panic
    // anywhere after this point still restores the user's shell
    setup_panic_hook();
    enable_raw_mode()?;
    // Raw mode is on from here; an error before the event loop must restore
    // the terminal itself, since the panic hook only covers panics
    let mut stdout = io::stdout();
    if let Err(err) = enter_tui_mode(&mut stdout) {
        leave_tui_mode(&mut io::stdout());
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            leave_tui_mode(&mut io::stdout());
            return Err(err.into());
        }
    };

    let mut app = App::new(config, SwapiClient::new());
    app.initialize();

    let result = run_app(&mut terminal, &mut app).await;

    leave_tui_mode(&mut io::stdout());
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of keyboard events
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (select! needs ownership)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            // Animation tick (spinners redraw while fetches are in flight)
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();
                            // Ctrl+C always quits, regardless of input mode
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                            } else {
                                app.handle_key(key);
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Fetch results from background tasks
            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
