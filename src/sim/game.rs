//! Game state machine
//!
//! Menu -> Playing -> Won | Lost -> Playing (restart) or Menu.
//! `GameState` owns the playfield and is the only thing the frame driver and
//! input layer talk to.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::grid::{BrickGrid, GridLayout};
use super::physics::{Playfield, RoundSignal, advance};
use super::schedule::{RoundEnd, Scheduler};
use super::snapshot::{BallView, BrickTier, BrickView, RectView, Snapshot};
use super::state::{Ball, GameEvent, GamePhase, HorizontalIntent, Key, Paddle};
use crate::consts::*;
use crate::error::GameError;
use crate::settings::{Settings, Theme};

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Difficulty of the current (or last) round
    pub difficulty: Option<Difficulty>,
    /// Round identifier, bumped on every round start
    pub round: u32,
    pub field: Playfield,
    /// End-of-round message once its delay has passed
    pub end_message: Option<String>,
    pub theme: Theme,
    /// Last time fed by the frame driver
    clock_ms: f64,
    round_end_delay_ms: f64,
    scheduler: Scheduler,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            difficulty: None,
            round: 0,
            field: Playfield::default(),
            end_message: None,
            theme: Theme::default(),
            clock_ms: 0.0,
            round_end_delay_ms: ROUND_END_DELAY_MS,
            scheduler: Scheduler::default(),
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
            round_end_delay_ms: settings.round_end_delay_ms.max(0.0),
            ..Self::new()
        }
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Round-end events still waiting for their delay
    pub fn pending_round_ends(&self) -> usize {
        self.scheduler.len()
    }

    /// Start a round from the menu or a finished round
    ///
    /// Unknown keys are rejected before anything is touched.
    pub fn select_difficulty(&mut self, key: &str) -> Result<Vec<GameEvent>, GameError> {
        let difficulty: Difficulty = key.parse()?;
        self.select(difficulty)
    }

    pub fn select(&mut self, difficulty: Difficulty) -> Result<Vec<GameEvent>, GameError> {
        if self.phase == GamePhase::Playing {
            return Err(self.reject("select a difficulty"));
        }
        Ok(vec![self.start_round(difficulty)])
    }

    /// Play the last difficulty again
    pub fn restart(&mut self) -> Result<Vec<GameEvent>, GameError> {
        match (self.phase, self.difficulty) {
            (phase, Some(difficulty)) if phase.is_round_over() => Ok(vec![self.start_round(difficulty)]),
            _ => Err(self.reject("restart")),
        }
    }

    pub fn return_to_menu(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if !self.phase.is_round_over() {
            return Err(self.reject("return to menu"));
        }
        let dropped = self.scheduler.cancel_all();
        if dropped > 0 {
            log::debug!("Dropped {} pending round end(s) on menu return", dropped);
        }
        self.phase = GamePhase::Menu;
        self.end_message = None;
        self.field.paddle.control = Default::default();
        log::info!("Returned to menu after round {}", self.round);
        Ok(vec![GameEvent::ReturnedToMenu])
    }

    /// Advance one frame
    ///
    /// Only valid while playing; otherwise nothing changes and the call is
    /// rejected so a speculative frame driver can ignore it.
    pub fn tick(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(self.reject("tick"));
        }

        let mut events = Vec::new();
        let outcome = advance(&mut self.field);

        if let Some(hit) = outcome.hit {
            log::debug!(
                "Brick ({}, {}) hit, {} left, score {}",
                hit.at.column,
                hit.at.row,
                hit.remaining_hits,
                self.field.score
            );
            events.push(GameEvent::BrickBroken {
                column: hit.at.column,
                row: hit.at.row,
                remaining_hits: hit.remaining_hits,
            });
        }

        if let Some(signal) = outcome.signal {
            self.phase = match signal {
                RoundSignal::Won => GamePhase::Won,
                RoundSignal::Lost => GamePhase::Lost,
            };
            self.scheduler.schedule(RoundEnd {
                round: self.round,
                due_ms: self.clock_ms + self.round_end_delay_ms,
                outcome: signal,
            });
            log::info!(
                "Round {} {:?} with score {}",
                self.round,
                signal,
                self.field.score
            );
            events.push(match signal {
                RoundSignal::Won => GameEvent::RoundWon { round: self.round },
                RoundSignal::Lost => GameEvent::RoundLost { round: self.round },
            });
        }

        Ok(events)
    }

    /// Feed the frame clock and fire any round-end presentation that is due
    ///
    /// The clock never runs backwards; an older timestamp is ignored.
    pub fn advance_clock(&mut self, now_ms: f64) -> Vec<GameEvent> {
        if now_ms > self.clock_ms {
            self.clock_ms = now_ms;
        }

        let mut events = Vec::new();
        for due in self.scheduler.drain_due(self.clock_ms) {
            if due.round != self.round || !self.phase.is_round_over() {
                log::warn!(
                    "Ignoring stale round end for round {} (current round {}, {:?})",
                    due.round,
                    self.round,
                    self.phase
                );
                continue;
            }
            let message = due.message().to_string();
            self.end_message = Some(message.clone());
            events.push(GameEvent::RoundEndShown {
                round: due.round,
                message,
            });
        }
        events
    }

    pub fn set_horizontal_intent(&mut self, intent: HorizontalIntent) {
        self.field.paddle.control.set_intent(intent);
    }

    pub fn key_down(&mut self, key: Key) {
        self.field.paddle.control.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.field.paddle.control.set_key(key, false);
    }

    /// Pointer moved to `relative_x` (arena coordinates)
    pub fn pointer_moved(&mut self, relative_x: f32) {
        if self.phase == GamePhase::Playing {
            self.field.paddle.follow_pointer(relative_x);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = &self.field.ball;
        let paddle = &self.field.paddle;
        let size = self.field.grid.brick_size();

        Snapshot {
            phase: self.phase,
            round: self.round,
            difficulty: self.difficulty,
            score: self.field.score,
            theme: self.theme.class_name(),
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
            },
            paddle: RectView {
                x: paddle.x,
                y: paddle.y(),
                width: paddle.width,
                height: paddle.height,
            },
            bricks: self
                .field
                .grid
                .active()
                .map(|(at, b)| {
                    let tier = BrickTier::from_remaining(b.remaining_hits);
                    BrickView {
                        column: at.column,
                        row: at.row,
                        rect: RectView {
                            x: b.pos.x,
                            y: b.pos.y,
                            width: size.x,
                            height: size.y,
                        },
                        strength: b.strength,
                        remaining_hits: b.remaining_hits,
                        tier,
                        color: tier.color(),
                    }
                })
                .collect(),
            end_message: self.end_message.clone(),
        }
    }

    /// Fresh ball, paddle, score and grid for `difficulty`
    fn start_round(&mut self, difficulty: Difficulty) -> GameEvent {
        let preset = difficulty.preset();

        self.round += 1;
        let dropped = self.scheduler.cancel_except(self.round);
        if dropped > 0 {
            log::debug!("Cancelled {} pending round end(s) from earlier rounds", dropped);
        }

        let mut grid = BrickGrid::initialize(preset.row_count, preset.column_count, preset.strength_pattern);
        grid.layout(&GridLayout::default());
        self.field = Playfield {
            ball: Ball::spawn(preset.ball_speed as f32),
            paddle: Paddle::default(),
            grid,
            score: 0,
        };
        self.difficulty = Some(difficulty);
        self.end_message = None;
        self.phase = GamePhase::Playing;

        log::info!(
            "Round {} started on {} ({}x{} bricks, {} hits)",
            self.round,
            difficulty.as_str(),
            preset.row_count,
            preset.column_count,
            self.field.grid.total_remaining_hits()
        );
        GameEvent::RoundStarted {
            round: self.round,
            difficulty,
        }
    }

    fn reject(&self, action: &'static str) -> GameError {
        log::debug!("Rejected '{}' while {:?}", action, self.phase);
        GameError::InvalidStateTransition {
            from: self.phase,
            action,
        }
    }
}
