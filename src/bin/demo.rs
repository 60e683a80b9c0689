//! columnview-demo - Interactive demo for the column view widget.
//!
//! Keys:
//!   a        add a sample row
//!   d        remove checked rows
//!   x        remove all rows
//!   u        update a cell of the first row
//!   s        log the current selection
//!   q/Esc    quit
//!
//! Mouse: click column headers to sort, checkboxes to toggle, wheel to
//! scroll.

use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use columnview::event::{Event, EventPump};
use columnview::{Action, ColumnView, handle_key, handle_mouse};

/// Interactive demo for the column view widget.
#[derive(Parser)]
#[command(name = "columnview-demo", about = "Column view widget demo")]
struct Args {
    /// Number of sample rows to preload.
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Disable the checkbox column.
    #[arg(long)]
    no_check: bool,

    /// Write tracing output to this file (the terminal stays clean).
    #[arg(long, value_name = "FILE")]
    log: Option<String>,
}

const SAMPLE_NAMES: &[&str] = &[
    "bolt", "washer", "screw", "nut", "rivet", "anchor", "dowel", "clamp",
];

fn sample_row(i: usize) -> Vec<String> {
    vec![
        SAMPLE_NAMES[i % SAMPLE_NAMES.len()].to_string(),
        ((i * 7) % 100).to_string(),
        format!("batch {}", i / SAMPLE_NAMES.len() + 1),
    ]
}

fn init_tracing(path: &str) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::from_default_env()
        .add_directive("columnview=debug".parse().unwrap())
        .add_directive("columnview_demo=info".parse().unwrap());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(mut view: ColumnView) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventPump::new();
    let mut next_sample = view.len();

    loop {
        terminal.draw(|frame| view.render(frame, frame.area()))?;

        let quit = match events.next() {
            Ok(Event::Key(key)) => handle_demo_key(&mut view, &mut next_sample, key),
            Ok(Event::Mouse(mouse)) => handle_mouse(&mut view, mouse) == Action::Quit,
            Ok(Event::Resize(..)) => false,
            Err(_) => true,
        };
        if quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    Ok(())
}

/// Demo-specific keys first, everything else through the widget bindings.
fn handle_demo_key(view: &mut ColumnView, next_sample: &mut usize, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('a') => {
            let id = view.add_row(sample_row(*next_sample));
            *next_sample += 1;
            info!(id, "added row");
            false
        }
        KeyCode::Char('d') => {
            view.remove_selected();
            false
        }
        KeyCode::Char('x') => {
            view.remove_all();
            *next_sample = 0;
            false
        }
        KeyCode::Char('u') => {
            view.update_column_item(0, 1, "999".to_string());
            false
        }
        KeyCode::Char('s') => {
            for row in view.list_selected() {
                info!(id = row.id, cells = ?row.cells, "selected");
            }
            false
        }
        _ => handle_key(view, key) == Action::Quit,
    }
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log {
        if let Err(e) = init_tracing(path) {
            eprintln!("Error opening log file '{}': {}", path, e);
            std::process::exit(1);
        }
    }

    // The trailing blank column exists so that, with the checkbox column
    // enabled, every named column still receives a declared width.
    let (headers, widths): (Vec<&str>, Vec<u16>) = if args.no_check {
        (vec!["Name", "Qty", "Note"], vec![12, 6, 18])
    } else {
        (vec!["Name", "Qty", "Note", ""], vec![4, 12, 6, 18])
    };

    let mut view = ColumnView::new(headers, &widths, !args.no_check);
    for i in 0..args.rows {
        view.add_row(sample_row(i));
    }

    if let Err(e) = run(view) {
        eprintln!("Error running demo: {}", e);
        std::process::exit(1);
    }
}
