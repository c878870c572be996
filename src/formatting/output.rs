use colored::*;

use crate::models::{GameStatistics, TrainingPlan};

pub fn print_statistics(stats: &GameStatistics) {
    println!(
        "{} {}",
        "Game statistics for".bold(),
        stats.team_id.bright_blue().bold()
    );
    println!("{}", "-".repeat(60));

    println!(
        "{:<8} {:<6} {:<6} {:<8} {:<10} {:<14}",
        "Played".bold(),
        "Won".bold(),
        "Drawn".bold(),
        "Lost".bold(),
        "Goals for".bold(),
        "Goals against".bold()
    );
    println!(
        "{:<8} {:<6} {:<6} {:<8} {:<10} {:<14}",
        stats.games_played,
        stats.wins.to_string().green(),
        stats.draws.to_string().yellow(),
        stats.losses.to_string().red(),
        stats.goals_for,
        stats.goals_against
    );

    if !stats.games.is_empty() {
        println!("\n{}", "Recent games:".bold());
        for game in &stats.games {
            let outcome = match game.outcome() {
                "W" => "W".green().bold(),
                "L" => "L".red().bold(),
                _ => "D".yellow().bold(),
            };
            let played = game.played_at.as_deref().unwrap_or("-");
            println!(
                "  {} {}-{} vs {} {}",
                outcome,
                game.goals_for,
                game.goals_against,
                truncate(&game.opponent, 30),
                played.bright_black()
            );
        }
    }
}

pub fn print_plans(plans: &[TrainingPlan]) {
    for plan in plans {
        let scheduled = plan.scheduled_for.as_deref().unwrap_or("unscheduled");
        println!(
            "{} {} {}",
            plan.title.bold(),
            plan.focus
                .as_deref()
                .map(|f| format!("[{}]", f).cyan())
                .unwrap_or_else(|| "".normal()),
            scheduled.bright_black()
        );

        for drill in &plan.drills {
            match drill.duration_minutes {
                Some(minutes) => println!("  • {} ({} min)", drill.name, minutes),
                None => println!("  • {}", drill.name),
            }
        }
        println!();
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
