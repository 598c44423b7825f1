//! Command-line interface for ttt-series.

use clap::Parser;
use ttt_series::{Difficulty, PlayerKind, PlayerSpec};

/// World Series of Tic Tac Toe - a best-of-N match in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt-series")]
#[command(about = "Play a best-of-N tic-tac-toe match", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Points needed to become champion. Asked for before each match when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub winning_score: Option<u32>,

    /// Seed for computer moves. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Player 1 (X) as KIND:NAME, KIND one of human, easy, hard
    #[arg(long, value_parser = parse_player)]
    pub player_one: Option<PlayerSpec>,

    /// Player 2 (O) as KIND:NAME, KIND one of human, easy, hard
    #[arg(long, value_parser = parse_player)]
    pub player_two: Option<PlayerSpec>,

    /// Don't wait for Return after computer moves and finished games
    #[arg(long)]
    pub no_pause: bool,
}

/// Parse `KIND:NAME` into a player description.
pub fn parse_player(arg: &str) -> Result<PlayerSpec, String> {
    let (kind, name) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:NAME, got `{arg}`"))?;

    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "human" => PlayerKind::Human,
        "easy" => PlayerKind::Computer(Difficulty::Easy),
        "hard" => PlayerKind::Computer(Difficulty::Hard),
        other => return Err(format!("unknown player kind `{other}` (human, easy, hard)")),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("player name must not be empty".to_string());
    }

    Ok(PlayerSpec::new(name, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_kinds() {
        assert_eq!(parse_player("human:Ann").unwrap(), PlayerSpec::human("Ann"));
        assert_eq!(
            parse_player("easy:Bot").unwrap(),
            PlayerSpec::computer("Bot", Difficulty::Easy)
        );
        assert_eq!(
            parse_player("HARD: Deep Blue ").unwrap(),
            PlayerSpec::computer("Deep Blue", Difficulty::Hard)
        );
    }

    #[test]
    fn test_parse_player_rejects_bad_input() {
        assert!(parse_player("Ann").is_err());
        assert!(parse_player("wizard:Ann").is_err());
        assert!(parse_player("human:  ").is_err());
    }

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "ttt-series",
            "--winning-score",
            "2",
            "--seed",
            "9",
            "--player-one",
            "human:Ann",
            "--player-two",
            "hard:Bot",
            "--no-pause",
        ]);
        assert_eq!(cli.winning_score, Some(2));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.player_one, Some(PlayerSpec::human("Ann")));
        assert_eq!(
            cli.player_two,
            Some(PlayerSpec::computer("Bot", Difficulty::Hard))
        );
        assert!(cli.no_pause);
    }

    #[test]
    fn test_cli_rejects_zero_winning_score() {
        assert!(Cli::try_parse_from(["ttt-series", "--winning-score", "0"]).is_err());
        let cli = Cli::try_parse_from(["ttt-series", "--winning-score", "1"]).unwrap();
        assert_eq!(cli.winning_score, Some(1));
    }
}
