//! Raw-mode key loop.
//!
//! Reads one key at a time, turns it into a `Direction` and hands it to
//! the board. The board is printed as plain text after every event.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, terminal};
use rust_2048::{Board, Direction, GameState};
use tracing::debug;

const HELP: &str = "arrows or u/d/l/r: move   n: new game   q: quit";

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move(Direction),
    NewGame,
    Quit,
    Ignore,
}

fn command_for(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('n') => Command::NewGame,
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char(c) => Direction::from_key(c).map_or(Command::Ignore, Command::Move),
        _ => Command::Ignore,
    }
}

/// Leaves raw mode and the alternate screen on drop, including on panic.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn render(out: &mut impl Write, board: &Board, last: Option<Direction>) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    // Raw mode does not translate "\n".
    for line in board.to_string().lines() {
        write!(out, "{line}\r\n")?;
    }
    if let Some(direction) = last {
        write!(out, "Last move: {direction}\r\n")?;
    }
    match board.get_state() {
        GameState::Ongoing => {}
        GameState::Won => write!(out, "\r\nYou reached {}!\r\n", board.config().target_tile)?,
        GameState::Lost => write!(out, "\r\nNo moves left.\r\n")?,
    }
    write!(out, "\r\n{HELP}\r\n")?;
    out.flush()
}

/// Run the game until the player quits.
pub fn run(mut board: Board) -> Result<()> {
    let _guard = ScreenGuard::enter()?;
    let mut stdout = io::stdout();
    let mut last = None;

    render(&mut stdout, &board, last)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match command_for(key) {
                Command::Quit => break,
                Command::NewGame => {
                    board.new_game();
                    last = None;
                }
                Command::Move(direction) => {
                    if board.get_state().is_terminal() {
                        continue;
                    }
                    let outcome = board.step(direction);
                    debug!(?outcome, "step");
                    if outcome.changed {
                        last = Some(direction);
                    }
                }
                Command::Ignore => continue,
            },
            Event::Resize(..) => {}
            _ => continue,
        }
        render(&mut stdout, &board, last)?;
    }

    Ok(())
}
