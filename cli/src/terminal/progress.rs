use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:32.green/white}] {pos}/{len} IPs ({elapsed})";

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

/// The shared bar. Hidden until a sweep starts.
pub fn get_progress() -> &'static ProgressBar {
    PROGRESS.get_or_init(ProgressBar::hidden)
}

pub fn start(total: usize) {
    let pb = get_progress();
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
        .progress_chars("━╸━");

    pb.set_style(style);
    pb.set_length(total as u64);
    pb.set_position(0);
    pb.set_message(format!("{}", "Pinging".bold()));
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(TICK_INTERVAL);
}

pub fn report_progress(completed: usize) {
    get_progress().set_position(completed as u64);
}

pub fn finish() {
    let pb = get_progress();
    pb.finish_and_clear();
    pb.set_draw_target(ProgressDrawTarget::hidden());
}

/// Log sink that prints above the bar instead of through it.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        // Raw mode (keyboard listener) disables the implicit carriage return.
        let eol = if crossterm::terminal::is_raw_mode_enabled().unwrap_or(false) {
            "\r\n"
        } else {
            "\n"
        };

        get_progress().suspend(|| {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "{msg}{eol}");
            let _ = stdout.flush();
        });
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
