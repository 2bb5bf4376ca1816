//! Terminal showcase for the gridform widgets.

mod app;
mod paths;
mod terminal;
mod theme;
mod users;

use std::fs::{self, File};
use std::path::PathBuf;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::{App, Control};
use terminal::Terminal;

/// Log to the cache directory, or the working directory if there is none.
fn init_logging() {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("gridform-demo.log"));
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_ok() {
                info!("[demo] logging to {}", path.display());
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

fn main() -> std::io::Result<()> {
    init_logging();

    let mut term = Terminal::new()?;
    let mut app = App::new();

    loop {
        let (width, _) = term.size()?;
        let lines = app.render(width as usize);
        term.draw(&lines, &app.theme())?;

        for event in term.poll()? {
            if app.handle_event(&event) == Control::Quit {
                info!("[demo] quit");
                return Ok(());
            }
        }
    }
}
