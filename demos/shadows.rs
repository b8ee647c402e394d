//! Terminal host for the sync engine: a fake data table in a scrollable
//! viewport. Edge shadows, footer placement, and the last-row border are
//! rendered straight from the published style variables.
//!
//! Keys: arrows/PageUp/PageDown scroll, `f` toggles fetching, `b` toggles row
//! borders, `q` quits. Mouse wheel scrolls too. Logs to shadows.log.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    MouseEventKind,
};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use tablesync::vars::{
    BORDER_NONE, VAR_FOOTER_POSITION, VAR_LAST_ROW_BORDER, VAR_SHADOW_BOTTOM, VAR_SHADOW_LEFT,
    VAR_SHADOW_RIGHT, VAR_SHADOW_TOP,
};
use tablesync::{Config, Elements, Engine, ScrollCallbacks, ScrollEvent, SizeSample, StyleScope};

const ROWS: usize = 60;
const COLS: usize = 8;
const COL_WIDTH: usize = 14;

/// One terminal cell is one layout pixel as far as the engine is concerned.
fn measure(engine: &mut Engine, term_w: u16, term_h: u16) -> (f64, f64) {
    // Header row, footer row, and one shadow row above/below the viewport.
    let viewport_w = f64::from(term_w);
    let viewport_h = f64::from(term_h.saturating_sub(4));
    let table_w = (COLS * COL_WIDTH) as f64;
    let table_h = ROWS as f64;

    engine.notify_resize(&[
        ("header", SizeSample::from_border_box(viewport_w, 1.0)),
        ("footer", SizeSample::from_border_box(viewport_w, 1.0)),
        ("body", SizeSample::from_border_box(table_w, table_h)),
        ("viewport", SizeSample::from_border_box(viewport_w, viewport_h)),
    ]);
    (table_w, table_h)
}

fn main() -> io::Result<()> {
    let log_file = File::create("shadows.log")?;
    WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file)
        .expect("Failed to initialize logger");

    let scope = Rc::new(RefCell::new(StyleScope::new()));
    let mut engine = Engine::new(Rc::clone(&scope), Config::default());
    engine.bind(
        Elements::new()
            .header("header")
            .footer("footer")
            .table("body")
            .viewport("viewport"),
    );

    let status = Rc::new(RefCell::new(String::from("scroll around")));
    let top_status = Rc::clone(&status);
    let bottom_status = Rc::clone(&status);
    let left_status = Rc::clone(&status);
    let right_status = Rc::clone(&status);
    engine.set_callbacks(
        ScrollCallbacks::new()
            .on_scroll_to_top(move || *top_status.borrow_mut() = String::from("reached top"))
            .on_scroll_to_bottom(move || {
                *bottom_status.borrow_mut() = String::from("reached bottom")
            })
            .on_scroll_to_left(move || *left_status.borrow_mut() = String::from("reached left"))
            .on_scroll_to_right(move || *right_status.borrow_mut() = String::from("reached right")),
    );

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut engine, &scope, &status);

    execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    stdout: &mut io::Stdout,
    engine: &mut Engine,
    scope: &Rc<RefCell<StyleScope>>,
    status: &Rc<RefCell<String>>,
) -> io::Result<()> {
    let (mut term_w, mut term_h) = terminal::size()?;
    let (mut table_w, mut table_h) = measure(engine, term_w, term_h);
    let mut scroll_top = 0.0f64;
    let mut scroll_left = 0.0f64;
    let mut fetching = false;
    let mut row_borders = false;

    engine.handle_scroll(&ScrollEvent::new(scroll_top, scroll_left));

    loop {
        draw(stdout, scope, status, term_w, term_h, scroll_top, scroll_left)?;

        let viewport_h = f64::from(term_h.saturating_sub(4));
        let viewport_w = f64::from(term_w);
        let max_top = (table_h - viewport_h).max(0.0);
        let max_left = (table_w - viewport_w).max(0.0);

        let (mut dy, mut dx) = (0.0f64, 0.0f64);
        match event::read()? {
            CrosstermEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => dy = -1.0,
                KeyCode::Down => dy = 1.0,
                KeyCode::PageUp => dy = -viewport_h,
                KeyCode::PageDown => dy = viewport_h,
                KeyCode::Left => dx = -2.0,
                KeyCode::Right => dx = 2.0,
                KeyCode::Char('f') => {
                    fetching = !fetching;
                    engine.set_fetching(fetching);
                    *status.borrow_mut() = format!("fetching: {}", fetching);
                }
                KeyCode::Char('b') => {
                    row_borders = !row_borders;
                    engine.set_row_borders(row_borders);
                    *status.borrow_mut() = format!("row borders: {}", row_borders);
                }
                _ => {}
            },
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => dy = -3.0,
                MouseEventKind::ScrollDown => dy = 3.0,
                _ => {}
            },
            CrosstermEvent::Resize(w, h) => {
                term_w = w;
                term_h = h;
                let measured = measure(engine, term_w, term_h);
                table_w = measured.0;
                table_h = measured.1;
            }
            _ => {}
        }

        if dx != 0.0 || dy != 0.0 {
            scroll_top = (scroll_top + dy).clamp(0.0, max_top);
            scroll_left = (scroll_left + dx).clamp(0.0, max_left);
            engine.handle_scroll(&ScrollEvent::new(scroll_top, scroll_left));
        }
    }
}

fn draw(
    stdout: &mut io::Stdout,
    scope: &Rc<RefCell<StyleScope>>,
    status: &Rc<RefCell<String>>,
    term_w: u16,
    term_h: u16,
    scroll_top: f64,
    scroll_left: f64,
) -> io::Result<()> {
    let scope = scope.borrow();
    let shadow = |var: &str| scope.get(var) == Some("1");
    let w = term_w as usize;
    let viewport_h = term_h.saturating_sub(4) as usize;

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    // Header with horizontal-shadow markers at its ends.
    let left_mark = if shadow(VAR_SHADOW_LEFT) { '<' } else { ' ' };
    let right_mark = if shadow(VAR_SHADOW_RIGHT) { '>' } else { ' ' };
    let title = format!(
        "{} row {:>3}  col {:>3}  |  {} {}",
        left_mark,
        scroll_top as usize,
        scroll_left as usize,
        status.borrow(),
        right_mark
    );
    queue!(stdout, cursor::MoveTo(0, 0), Print(pad(&title, w)))?;

    // Top shadow line.
    let top_line = if shadow(VAR_SHADOW_TOP) {
        "▔".repeat(w)
    } else {
        " ".repeat(w)
    };
    queue!(stdout, cursor::MoveTo(0, 1), Print(top_line))?;

    // Visible slice of the table body.
    let first = scroll_top as usize;
    for screen_row in 0..viewport_h {
        let row = first + screen_row;
        let line = if row < ROWS {
            table_row(row, scroll_left as usize, w)
        } else {
            " ".repeat(w)
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 2 + screen_row as u16),
            Print(line)
        )?;
    }

    // Last-row border, drawn only when the engine published a declaration.
    if scope.get(VAR_LAST_ROW_BORDER).is_some_and(|v| v != BORDER_NONE) && ROWS < viewport_h {
        queue!(
            stdout,
            cursor::MoveTo(0, 2 + ROWS as u16),
            Print("─".repeat(w))
        )?;
    }

    // Bottom shadow line.
    let bottom_line = if shadow(VAR_SHADOW_BOTTOM) {
        "▁".repeat(w)
    } else {
        " ".repeat(w)
    };
    queue!(
        stdout,
        cursor::MoveTo(0, 2 + viewport_h as u16),
        Print(bottom_line)
    )?;

    // Footer, placed per the published position keyword.
    let position = scope.get(VAR_FOOTER_POSITION).unwrap_or("sticky");
    let footer = format!(
        "[footer: {}]  q quit  f fetching  b borders  arrows/wheel scroll",
        position
    );
    let footer_y = if position == "relative" && ROWS + 3 < term_h as usize {
        (ROWS + 3) as u16
    } else {
        term_h.saturating_sub(1)
    };
    queue!(stdout, cursor::MoveTo(0, footer_y), Print(pad(&footer, w)))?;

    stdout.flush()
}

fn table_row(row: usize, first_col_px: usize, width: usize) -> String {
    let mut line = String::new();
    for col in 0..COLS {
        line.push_str(&format!("{:<width$}", format!("r{}c{}", row, col), width = COL_WIDTH));
    }
    let end = (first_col_px + width).min(line.len());
    let start = first_col_px.min(end);
    pad(&line[start..end], width)
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
