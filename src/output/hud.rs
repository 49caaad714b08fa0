//! Terminal rendering of the HUD and the article card

use crate::game::{ArticleCard, CardStatus};
use crate::state::{Mode, Session, SpeedrunView};
use crate::title::display_title;

/// Formats the heads-up display above the card
///
/// Always shows the mode and step count. In speedrun mode a second line shows
/// start, target, and the clock with one decimal; the clock stops once the
/// target is reached.
pub fn format_hud(session: &Session) -> String {
    let mut hud = format!(
        "Current Mode: {} | Steps: {}",
        session.mode().label(),
        session.steps()
    );

    if session.mode() == Mode::Speedrun {
        let run = session.speedrun();
        hud.push_str(&format!(
            "\nStart: {} | Target: {} | {:.1}",
            run.start(),
            run.target(),
            run.elapsed().as_secs_f64()
        ));
        if run.view() == SpeedrunView::Candidate {
            hud.push_str(&format!(
                "\nStanding on: {} (candidate {}/{})",
                run.current(),
                run.position() + 1,
                run.candidates().len()
            ));
        }
    }

    hud
}

/// Formats an article card: title rule, then the text blocks
pub fn format_card(card: &ArticleCard) -> String {
    let title = display_title(&card.title);
    let rule = "─".repeat(title.chars().count().clamp(20, 72));
    let mut out = format!("{}\n{}\n{}\n", rule, title, rule);

    match &card.status {
        CardStatus::Loaded => {
            if card.blocks.is_empty() {
                out.push_str("(This article has no text to show.)\n");
            }
            for block in &card.blocks {
                out.push('\n');
                out.push_str(block);
                out.push('\n');
            }
        }
        CardStatus::Failed(message) => {
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }
    }

    out
}

/// Prints the HUD and the card to stdout
pub fn print_card(session: &Session, card: &ArticleCard) {
    println!();
    println!("{}", format_hud(session));
    println!();
    print!("{}", format_card(card));

    if let Some(summary) = session.run_summary() {
        println!();
        println!("{}", summary);
    }
}
