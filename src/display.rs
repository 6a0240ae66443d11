use colored::Colorize;

use crate::database::{Match, Player};
use crate::swiss::{RoundPairings, StandingRow, UnpairedOutcome};

pub fn print_standings(rows: &[StandingRow]) {
    if rows.is_empty() {
        println!("No players registered");
        return;
    }

    println!(
        "{}",
        format!("{:>4}  {:>5}  {:<24} {:>5} {:>8}", "rank", "id", "name", "wins", "matches").bold()
    );
    for (idx, row) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:>5}  {:<24} {:>5} {:>8}",
            idx + 1,
            row.id,
            row.name,
            row.wins,
            row.matches_played
        );
    }
}

pub fn print_pairings(round: &RoundPairings) {
    if round.is_empty() {
        println!("No players to pair");
        return;
    }

    for (idx, pairing) in round.pairings.iter().enumerate() {
        println!(
            "{:>3}. {} ({}) vs {} ({})",
            idx + 1,
            pairing.first.name.bold(),
            pairing.first.id,
            pairing.second.name.bold(),
            pairing.second.id
        );
    }

    if let Some(unpaired) = &round.unpaired {
        let label = match unpaired.outcome {
            UnpairedOutcome::Bye => "bye".green(),
            UnpairedOutcome::Dropped => "dropped".yellow(),
        };
        println!("     {} ({}): {}", unpaired.seat.name, unpaired.seat.id, label);
    }
}

pub fn print_players(players: &[Player]) {
    if players.is_empty() {
        println!("No players registered");
        return;
    }

    println!("{}", format!("{:>5}  {}", "id", "name").bold());
    for player in players {
        println!("{:>5}  {}", player.id, player.name);
    }
}

pub fn print_matches(matches: &[Match]) {
    if matches.is_empty() {
        println!("No matches recorded");
        return;
    }

    println!("{}", format!("{:>5}  {:>6}  {:>6}  {}", "match", "winner", "loser", "score").bold());
    for recorded in matches {
        let score = match (recorded.winner_score, recorded.loser_score) {
            (Some(w), Some(l)) => format!("{w}-{l}"),
            _ => "-".to_string(),
        };
        println!(
            "{:>5}  {:>6}  {:>6}  {}",
            recorded.match_id, recorded.winner, recorded.loser, score
        );
    }
}
