use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::SearchConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player, BOARD_SIZE};

/// Seconds granted to the agent per move. The search sizes itself by depth,
/// so this is a formality of the agent interface.
const AGENT_TIME_BUDGET: Duration = Duration::from_secs(5);

pub struct App {
    game_state: GameState,
    cursor: (usize, usize),
    agent: MinimaxAgent<GameState>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// The human plays X and moves first; the configured agent answers as O.
    pub fn new(config: &SearchConfig) -> Self {
        App {
            game_state: GameState::initial(),
            cursor: (0, 0),
            agent: config.agent_2d(),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.cursor = (0, 0);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place the human mark at the cursor, then let the agent answer
    fn place_mark(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let (row, col) = self.cursor;
        match self.game_state.place(row, col) {
            Ok(next) => {
                self.game_state = next;
                if self.announce_outcome() {
                    return;
                }
                self.agent_reply();
            }
            Err(MoveError::Occupied) => {
                self.message = Some("Cell is taken!".to_string());
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("Out of bounds!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn agent_reply(&mut self) {
        if self.game_state.mover() != Player::O {
            return;
        }
        let deadline = Instant::now() + AGENT_TIME_BUDGET;
        self.game_state = self.agent.select_move(&self.game_state, deadline);
        self.announce_outcome();
    }

    /// Report the outcome if the game just ended
    fn announce_outcome(&mut self) -> bool {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
            true
        } else {
            false
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            &self.message,
            self.agent.name(),
        );
    }
}
