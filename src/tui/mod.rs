//! TUI (Text User Interface) to view a formatted message, optionally following a file as it grows.

mod app;
mod constants;
mod draw;
mod handlers;
mod render;
mod shortcuts;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::time::{Duration, Instant};

use concierge_format::core::config::Config;
use concierge_format::core::input::{self, InputSource};
use concierge_format::core::watch::FilePoller;

use app::App;
use draw::draw;
use handlers::HandleResult;

/// What the viewer shows and how it refreshes.
pub struct ViewerOptions {
    pub source: InputSource,
    /// Message text already decoded from the source.
    pub content: String,
    /// Decode reloaded file content as a chat JSON payload.
    pub from_json: bool,
    /// Poll the source file for changes.
    pub watch: bool,
    pub config: Config,
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Check the watched file and apply a changed message to the viewer.
fn apply_poll(poller: &mut FilePoller, app: &mut App, from_json: bool, now: Instant) {
    match poller.poll(now) {
        Ok(Some(raw)) => match input::decode(&raw, from_json) {
            Ok(content) => {
                log::info!("Reloaded {} ({} bytes)", poller.path().display(), raw.len());
                app.set_content(&content);
            }
            Err(e) => app.last_error = Some(e.to_string()),
        },
        Ok(None) => {}
        Err(e) => {
            log::debug!("Polling {} failed: {}", poller.path().display(), e);
            app.last_error = Some(format!("{}: {}", poller.path().display(), e));
        }
    }
}

/// Run the viewer loop until the user quits.
pub fn run(options: ViewerOptions) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let ViewerOptions {
        source,
        content,
        from_json,
        watch,
        config,
    } = options;

    let mut app = App::new(source.label(), &content, config.follow, config.wrap_width);
    let mut poller = match source.path() {
        Some(path) if watch => {
            let mut poller = FilePoller::new(path, config.poll_interval);
            if let Err(e) = poller.prime() {
                log::debug!("Could not stat {}: {}", path.display(), e);
            }
            app.watching = true;
            Some(poller)
        }
        _ => None,
    };

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        if let Some(ref mut poller) = poller {
            apply_poll(poller, &mut app, from_json, Instant::now());
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key(key, &mut app) == HandleResult::Break {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
