use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api::ApiClient;
use crate::cache::BlogCache;
use crate::config::ConfigStore;
use crate::notify::NoticeTimer;
use crate::session::SessionFile;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::Worker;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let cfg = config.get();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let runtime = tokio::runtime::Runtime::new()?;

    let api = Arc::new(ApiClient::new(&cfg.server));
    let cache = Arc::new(BlogCache::new(Arc::clone(&api)));
    let session_file = SessionFile::new();

    let (command_tx, command_rx) = tokio::sync::mpsc::channel(32);
    let worker = Worker::new(
        Arc::clone(&api),
        Arc::clone(&cache),
        session_file.clone(),
        events.sender(),
    );
    runtime.spawn(worker.run(command_rx));

    let mut app = App::new(config);
    app.set_command_sender(command_tx);
    app.set_notice_timer(NoticeTimer::new(runtime.handle().clone(), events.sender()));

    if let Some(session) = session_file.load() {
        info!("restoring stored session for {}", session.username);
        api.set_token(Some(session.token.clone()));
        app.restore_session(session);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.apply(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
