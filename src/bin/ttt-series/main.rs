//! ttt-series - console front-end
//!
//! Collects players and the target score, then plays best-of-N matches in
//! the terminal until the user stops. Logs go to stderr (`RUST_LOG`).

mod cli;
mod console;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::{first_letter, Console};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ttt_series::{
    Board, Difficulty, GameOutcome, MatchConfig, MatchController, MatchOutcome, PlayerOrder,
    PlayerSpec, Position,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run(&cli, &mut console)
}

/// Welcome, create players, then play matches until the user declines.
fn run<R: BufRead, W: Write>(cli: &Cli, console: &mut Console<R, W>) -> Result<()> {
    console.say("Welcome to the World Series of Tic Tac Toe!")?;

    let first = match &cli.player_one {
        Some(spec) => spec.clone(),
        None => create_player(console, PlayerOrder::First)?,
    };
    let second = match &cli.player_two {
        Some(spec) => spec.clone(),
        None => create_player(console, PlayerOrder::Second)?,
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = MatchConfig::default()
        .with_winning_score(winning_score(cli, console)?)
        .with_seed(seed);
    info!(seed, "starting series");

    let mut controller = MatchController::new(&config, first, second)?;
    let pause = !cli.no_pause;

    loop {
        play_match(&mut controller, console, pause)?;
        if !play_again(console)? {
            break;
        }
        controller.reset_match(winning_score(cli, console)?)?;
    }

    console.say("Goodbye!")?;
    Ok(())
}

fn create_player<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    order: PlayerOrder,
) -> Result<PlayerSpec> {
    console.say(format!("~~~~~~~~~CREATE {}~~~~~~~~~", order.to_string().to_uppercase()))?;

    let human = console.prompt_until_valid(
        &format!("Is {order} a human or a computer (h, c)?"),
        "That's not a valid choice.",
        |answer| match first_letter(answer) {
            Some('h') => Some(true),
            Some('c') => Some(false),
            _ => None,
        },
    )?;

    let name = console.prompt_until_valid(
        &format!("Enter {order}'s name:"),
        "That's not a valid name.",
        |answer| {
            let name = answer.trim();
            (!name.is_empty()).then(|| name.to_string())
        },
    )?;

    if human {
        return Ok(PlayerSpec::human(name));
    }

    let difficulty = console.prompt_until_valid(
        &format!("Is {name} on easy mode or hard mode (e, h)?"),
        "That's not a valid choice.",
        |answer| match first_letter(answer) {
            Some('e') => Some(Difficulty::Easy),
            Some('h') => Some(Difficulty::Hard),
            _ => None,
        },
    )?;

    Ok(PlayerSpec::computer(name, difficulty))
}

/// The command-line target, or ask for one.
fn winning_score<R: BufRead, W: Write>(cli: &Cli, console: &mut Console<R, W>) -> Result<u32> {
    if let Some(score) = cli.winning_score {
        return Ok(score);
    }

    let score = console.prompt_until_valid(
        "Enter score that will determine the champion:",
        "That's not a valid score.",
        |answer| answer.trim().parse::<u32>().ok().filter(|&score| score > 0),
    )?;
    Ok(score)
}

fn play_match<R: BufRead, W: Write>(
    controller: &mut MatchController,
    console: &mut Console<R, W>,
    pause: bool,
) -> Result<()> {
    while !controller.is_match_over() {
        controller.start_next_game()?;
        let game_number = controller.game_number();

        while let Some(active) = controller.phase().active() {
            console.say(render::scoreboard(controller, game_number))?;

            let player = controller.player(active);
            console.say(format!("{}'s turn:", player.name()))?;

            let human_input = if player.is_human() {
                Some(choose_square(console, controller.board())?)
            } else {
                if pause {
                    console.wait("Making choice...(press return to continue)")?;
                }
                None
            };

            let report = controller.play_turn(human_input)?;
            debug!(position = report.choice.position.get(), "turn played");
        }

        console.say(render::scoreboard(controller, game_number))?;
        match controller.last_game().map(|record| record.outcome) {
            Some(GameOutcome::Winner { order, .. }) => {
                console.say(format!("{} wins!", controller.player(order).name()))?;
            }
            Some(GameOutcome::Tie) => console.say("It's a tie.")?,
            None => {}
        }
        if pause {
            console.wait("Press Return to proceed:")?;
        }
    }

    match controller.match_outcome() {
        Some(MatchOutcome::Champion(order)) => {
            console.say(format!("{} is the Champion!", controller.player(order).name()))?;
        }
        _ => console.say("This match has been declared a tie.")?,
    }
    Ok(())
}

fn choose_square<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &Board,
) -> Result<Position> {
    let choices = board.empty_positions();
    let question = format!(
        "Make your selection: (choices are: {})",
        render::join_or(&choices, ",", "or")
    );

    let position = console.prompt_until_valid(&question, "That's not a valid choice.", |answer| {
        answer
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|n| Position::new(n).ok())
            .filter(|position| choices.contains(position))
    })?;
    Ok(position)
}

fn play_again<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool> {
    let again = console.prompt_until_valid(
        "Would you like to play again (y, n)?",
        "Please choose a valid response (y, n).",
        |answer| match first_letter(answer) {
            Some('y') => Some(true),
            Some('n') => Some(false),
            _ => None,
        },
    )?;
    Ok(again)
}
