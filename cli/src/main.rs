use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use clap::{Parser, ValueEnum};
use sweeper_core::{AiMode, Controller, Coord, Difficulty, InputOutcome, PlayerInput};

use crate::command::Command;
use crate::settings::Settings;

mod command;
mod render;
mod settings;

#[derive(ValueEnum, Copy, Clone, Debug)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ModeArg {
    /// Human plays alone
    Off,
    /// Human and AI take turns
    Alternate,
    /// AI plays every move
    Solver,
}

impl From<ModeArg> for AiMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Off => AiMode::Off,
            ModeArg::Alternate => AiMode::Alternate,
            ModeArg::Solver => AiMode::Solver,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Mine count, clamped to 10..=20
    #[arg(short, long, allow_negative_numbers = true)]
    mines: Option<i64>,

    /// Board side length
    #[arg(long)]
    size: Option<Coord>,

    /// AI skill tier
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Who plays
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Let the AI open the game in alternate mode
    #[arg(long)]
    ai_first: bool,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        settings.size = self.size.or(settings.size);
        settings.mines = self.mines.or(settings.mines);
        settings.seed = self.seed.or(settings.seed);
        if let Some(difficulty) = self.difficulty {
            settings.ai.difficulty = difficulty.into();
        }
        if let Some(mode) = self.mode {
            settings.ai.mode = mode.into();
        }
        settings.ai.ai_first |= self.ai_first;
        Ok(settings)
    }
}

fn init_logging(level: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let settings = args.settings()?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let mut ctl = Controller::new(settings.game_config(), settings.ai, seed)?;
    log::debug!("Game started with {:?}", ctl.game().mine_count());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut redraw = true;

    loop {
        if redraw {
            println!("{}", render::board(ctl.game()));
            println!("{}", render::status_line(&ctl));
            if let Some(verdict) = ctl.verdict() {
                println!("{}", render::verdict(verdict));
                println!("Type `n` for a new game or `q` to quit.");
            }
            redraw = false;
        }

        if ctl.ai_due() {
            thread::sleep(ctl.ai_delay());
            let report = ctl.step_ai()?;
            println!("AI reveals {} {}", report.coords.0, report.coords.1);
            redraw = true;
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                redraw = report_input(ctl.apply_input(PlayerInput::reveal(coords)));
            }
            Command::Flag(coords) => {
                redraw = report_input(ctl.apply_input(PlayerInput::flag(coords)));
            }
            Command::Restart(mines) => {
                let mines = mines.unwrap_or_else(|| settings.mines_or(ctl.game().mine_count()));
                ctl.restart(mines)?;
                log::info!("Restarted with {} mines", ctl.game().mine_count());
                redraw = true;
            }
            Command::Difficulty(difficulty) => {
                ctl.set_difficulty(difficulty);
                println!("AI difficulty: {:?}", difficulty);
            }
            Command::Help => println!("{}", command::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

/// Prints feedback for a rejected move; returns whether the board changed.
fn report_input(outcome: InputOutcome) -> bool {
    match outcome {
        InputOutcome::Applied(report) => {
            if !report.outcome.has_update() {
                println!("Nothing to reveal there");
            }
            report.outcome.has_update()
        }
        InputOutcome::Flagged(mark) => {
            if !mark.has_update() {
                println!("Cannot flag that cell");
            }
            mark.has_update()
        }
        InputOutcome::NotYourTurn => {
            println!("Wait for the AI to move");
            false
        }
        InputOutcome::GameOver => {
            println!("The game is over, type `n` to play again");
            false
        }
    }
}
