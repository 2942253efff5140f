use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Separates the AI's random stream from the board's when both come from one seed.
const AI_STREAM: u64 = 0xa1a1_5eed_0000_0001;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// Human plays alone.
    Off,
    /// Human and AI take turns revealing cells.
    Alternate,
    /// AI plays every move.
    Solver,
}

impl Default for AiMode {
    fn default() -> Self {
        Self::Off
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// A click from the presentation layer, already translated to board coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayerInput {
    pub coords: Coord2,
    pub action: Action,
}

impl PlayerInput {
    pub const fn reveal(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Reveal,
        }
    }

    pub const fn flag(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Flag,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub mode: AiMode,
    pub difficulty: Difficulty,
    /// Gives the AI the even turns in alternate mode.
    pub ai_first: bool,
    /// Pause a front end should insert before each AI move.
    pub ai_delay_ms: u64,
}

impl ControllerConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: AiMode::Off,
            difficulty: Difficulty::Easy,
            ai_first: false,
            ai_delay_ms: 500,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Cleared,
    Detonated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumanResult {
    Won,
    Lost,
}

impl HumanResult {
    const fn opposite(self) -> Self {
        match self {
            Self::Won => Self::Lost,
            Self::Lost => Self::Won,
        }
    }
}

/// How a finished game ended and what it means for the human.
///
/// Clearing the board wins for whoever cleared it and detonating a mine loses
/// for whoever detonated it. When the AI ends an alternate game the human gets
/// the opposite result; in solver mode the AI plays on the human's behalf.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub trigger: Trigger,
    pub by: Player,
    pub human: HumanResult,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveReport {
    pub player: Player,
    pub coords: Coord2,
    pub outcome: RevealOutcome,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputOutcome {
    Applied(MoveReport),
    Flagged(MarkOutcome),
    NotYourTurn,
    GameOver,
}

/// Sequences human and AI moves over one game.
#[derive(Clone, Debug)]
pub struct Controller {
    game: GameState,
    ai: AiEngine,
    config: ControllerConfig,
    turn: u32,
    verdict: Option<Verdict>,
}

impl Controller {
    pub fn new(game_config: GameConfig, config: ControllerConfig, seed: u64) -> Result<Self> {
        let game = GameState::new_game(game_config, seed)?;
        Ok(Self::from_game(game, config, seed))
    }

    pub fn from_game(game: GameState, config: ControllerConfig, seed: u64) -> Self {
        Self {
            game,
            ai: AiEngine::new(config.difficulty, seed ^ AI_STREAM),
            config,
            turn: 0,
            verdict: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn ai_delay(&self) -> Duration {
        self.config.ai_delay()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Who the turn parity currently belongs to in alternate mode.
    pub fn turn_owner(&self) -> Player {
        let even = self.turn % 2 == 0;
        if even != self.config.ai_first {
            Player::Human
        } else {
            Player::Ai
        }
    }

    /// Whether the next move belongs to the AI.
    pub fn ai_due(&self) -> bool {
        if self.game.is_finished() {
            return false;
        }
        match self.config.mode {
            AiMode::Off => false,
            AiMode::Alternate => self.turn_owner() == Player::Ai,
            AiMode::Solver => true,
        }
    }

    fn human_may_move(&self) -> bool {
        match self.config.mode {
            AiMode::Off => true,
            AiMode::Alternate => self.turn_owner() == Player::Human,
            AiMode::Solver => false,
        }
    }

    pub fn step_ai(&mut self) -> Result<MoveReport> {
        if !self.ai_due() {
            return Err(GameError::NotAiTurn);
        }

        let coords = self.ai.select_move(&self.game)?;
        if self.game.is_flagged(coords) {
            log::debug!("AI reveals flagged cell {:?}", coords);
        }

        let report = self.apply_reveal(Player::Ai, coords);
        self.turn += 1;
        Ok(report)
    }

    pub fn apply_input(&mut self, input: PlayerInput) -> InputOutcome {
        if self.game.is_finished() {
            return InputOutcome::GameOver;
        }
        if !self.human_may_move() {
            log::debug!("Ignoring {:?}, turn {} is not the human's", input, self.turn);
            return InputOutcome::NotYourTurn;
        }

        match input.action {
            Action::Flag => InputOutcome::Flagged(self.game.toggle_flag(input.coords)),
            Action::Reveal => {
                let report = self.apply_reveal(Player::Human, input.coords);
                if report.outcome.has_update() {
                    self.turn += 1;
                }
                InputOutcome::Applied(report)
            }
        }
    }

    /// Switches the AI tier; takes effect from the next AI move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.ai.set_difficulty(difficulty);
        log::debug!("AI difficulty set to {:?}", self.ai.difficulty());
    }

    /// Starts over on a fresh board with a clamped mine count.
    pub fn restart(&mut self, mines: i64) -> Result<()> {
        self.game.restart(mines)?;
        self.turn = 0;
        self.verdict = None;
        Ok(())
    }

    fn apply_reveal(&mut self, player: Player, coords: Coord2) -> MoveReport {
        let outcome = self.game.reveal(coords);
        self.game.check_victory();
        log::debug!("{:?} revealed {:?}: {:?}", player, coords, outcome);

        if self.verdict.is_none() {
            self.verdict = self.judge(player);
            if let Some(verdict) = self.verdict {
                log::debug!("Game over: {:?}", verdict);
            }
        }

        MoveReport {
            player,
            coords,
            outcome,
        }
    }

    fn judge(&self, player: Player) -> Option<Verdict> {
        let (trigger, board_result) = match self.game.status() {
            GameStatus::Playing => return None,
            GameStatus::Won => (Trigger::Cleared, HumanResult::Won),
            GameStatus::Lost => (Trigger::Detonated, HumanResult::Lost),
        };

        let human = match (self.config.mode, player) {
            (AiMode::Alternate, Player::Ai) => board_result.opposite(),
            _ => board_result,
        };

        Some(Verdict {
            trigger,
            by: player,
            human,
        })
    }
}
