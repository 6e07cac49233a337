use colored::Colorize;

use crate::swiss::{Pairing, StandingEntry};

pub fn format_standings(standings: &[StandingEntry]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>4}  {:>6}  {:<30} {:>5} {:>6} {:>8}",
        "Rank", "Id", "Name", "Wins", "Losses", "Matches"
    )];
    lines.extend(standings.iter().enumerate().map(|(i, entry)| {
        format!(
            "{:>4}  {:>6}  {:<30} {:>5} {:>6} {:>8}",
            i + 1,
            entry.player_id,
            entry.name,
            entry.wins,
            entry.losses(),
            entry.matches
        )
    }));
    lines
}

pub fn format_pairings(pairings: &[Pairing]) -> Vec<String> {
    pairings
        .iter()
        .enumerate()
        .map(|(i, pairing)| {
            let line = format!(
                "Table {:>3}: {} ({}) vs {} ({})",
                i + 1,
                pairing.player1_name,
                pairing.player1_id,
                pairing.player2_name,
                pairing.player2_id
            );
            if pairing.rematch { format!("{} [rematch]", line) } else { line }
        })
        .collect()
}

pub fn print_standings(standings: &[StandingEntry]) {
    if standings.is_empty() {
        println!("{}", "No players registered".yellow());
        return;
    }

    let lines = format_standings(standings);
    println!("{}", lines[0].bold());
    for line in &lines[1..] {
        println!("{}", line);
    }
}

pub fn print_pairings(pairings: &[Pairing]) {
    if pairings.is_empty() {
        println!("{}", "No pairings".yellow());
        return;
    }

    println!("{}", "Next round".bold());
    for (line, pairing) in format_pairings(pairings).iter().zip(pairings) {
        if pairing.rematch {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_standings() {
        let standings = vec![StandingEntry {
            player_id: 1,
            name: "Alice".to_string(),
            wins: 2,
            matches: 3,
        }];

        let lines = format_standings(&standings);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Rank"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[1].trim_start().starts_with('1'));
    }

    #[test]
    fn test_format_pairings_marks_rematches() {
        let pairing = Pairing {
            player1_id: 1,
            player1_name: "Alice".to_string(),
            player2_id: 2,
            player2_name: "Bob".to_string(),
            rematch: true,
        };

        let lines = format_pairings(&[pairing]);

        assert_eq!(lines, vec!["Table   1: Alice (1) vs Bob (2) [rematch]"]);
    }
}
