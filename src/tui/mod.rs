mod charts;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use crate::cdf::EmpiricalCdf;
use crate::model::FileReport;

/// One plottable file: its report plus the derived CDF.
pub struct CdfView {
    pub report: FileReport,
    pub cdf: EmpiricalCdf,
}

/// Open the interactive CDF viewer over the analyzed files.
/// Blocks until the user quits.
pub fn run(views: &[CdfView]) -> Result<()> {
    if views.is_empty() {
        return Ok(());
    }

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut selected = 0usize;
    let res = loop {
        terminal
            .draw(|f| charts::draw_cdf(f.area(), f, views, selected))
            .ok();

        // Poll with a timeout so terminal resizes redraw promptly.
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match (k.modifiers, k.code) {
                    (_, KeyCode::Char('q'))
                    | (_, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => break Ok(()),
                    (_, KeyCode::Tab) | (_, KeyCode::Right) | (_, KeyCode::Char('l')) => {
                        selected = (selected + 1) % views.len();
                    }
                    (_, KeyCode::Left) | (_, KeyCode::Char('h')) => {
                        selected = (selected + views.len() - 1) % views.len();
                    }
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    res
}
