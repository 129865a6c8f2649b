use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tracing::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for `q` / Ctrl-C while a sweep runs and raises the stop signal.
///
/// Raw mode stays enabled for the lifetime of the handle.
pub struct InputHandle {
    done: Arc<AtomicBool>,
    listener: Option<JoinHandle<()>>,
}

impl InputHandle {
    pub fn start(stop_signal: Arc<AtomicBool>) -> anyhow::Result<Self> {
        enable_raw_mode()?;

        let done = Arc::new(AtomicBool::new(false));
        let done_ref = done.clone();

        let listener = thread::spawn(move || {
            while !done_ref.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        if let Ok(Event::Key(key_event)) = event::read() {
                            if is_stop_key(&key_event) {
                                stop_signal.store(true, Ordering::Relaxed);
                                warn!("Stopping early, waiting for running probes to finish...");
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            done,
            listener: Some(listener),
        })
    }
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(listener) = self.listener.take() {
            let _ = listener.join();
        }
        let _ = disable_raw_mode();
    }
}

fn is_stop_key(key_event: &KeyEvent) -> bool {
    let is_q = key_event.code == KeyCode::Char('q');
    let is_ctrl_c = key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL);

    (is_q || is_ctrl_c) && key_event.kind == KeyEventKind::Press
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
