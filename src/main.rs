mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use bug_crossing::compute::GameState;
use bug_crossing::input::Direction;
use bug_crossing::render::render;

use display::TerminalCanvas;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Longest step fed to the simulation, so a stalled terminal doesn't teleport bugs.
const MAX_DT: f32 = 0.1;

const LOG_FILE: &str = "bug_crossing.log";

// ── Input ─────────────────────────────────────────────────────────────────────

enum Command {
    Move(Direction),
    ToggleDebug,
    Quit,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::ToggleDebug),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. One key press is one step, so only `Press`
/// events count; held-key repeats arrive as further presses.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut canvas = TerminalCanvas::new();
    let mut state = GameState::new(&mut rng);
    state.announce(&mut canvas);

    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match command_for(code, modifiers) {
                Some(Command::Move(direction)) => state.handle_input(Some(direction)),
                Some(Command::ToggleDebug) => state.debug = !state.debug,
                Some(Command::Quit) => return Ok(()),
                None => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(MAX_DT);
        last = now;

        state.update(dt, &mut rng, &mut canvas);

        canvas.clear();
        render(&state, &mut canvas);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Logging is opt-in through `RUST_LOG` and goes to a file, since the game
/// owns the terminal.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(file) = File::create(LOG_FILE) {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
