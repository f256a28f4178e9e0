//! The `blogquiz quiz` command.
//!
//! Searches, generates a quiz from the results, and runs one answer-reveal
//! cycle per question on stdin. Answers are the letters A-D, one per line,
//! so the command works both interactively and with piped input.

use std::io::BufRead;

use anyhow::Result;

use blogquiz_core::search::search;
use blogquiz_core::session::{generate_quiz, ScoreBand};
use blogquiz_core::store::PostStore;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn execute(store: &PostStore, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("inserisci un termine di ricerca");
    }

    let results = search(store, query);
    let Some(mut session) = generate_quiz(&results, query) else {
        println!("Nessun articolo trovato per \"{query}\": nessun quiz da generare.");
        return Ok(());
    };

    println!(
        "Quiz su \"{}\": {} domande.\n",
        session.topic,
        session.questions.len()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let total = session.questions.len();

    for index in 0..total {
        let question = session.questions[index].clone();
        println!("Domanda {}/{}: {}", index + 1, total, question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", OPTION_LABELS[i], option.text);
        }

        let choice = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if let Some(choice) = parse_choice(&line, question.options.len()) {
                        break choice;
                    }
                    println!("Risposta non valida, usa una lettera tra A e D.");
                }
                None => anyhow::bail!("input terminato prima della fine del quiz"),
            }
        };

        // Indices are in range here, so the outcome is always present.
        let Some(outcome) = session.record_answer(index, choice) else {
            anyhow::bail!("risposta non registrata");
        };

        let picked = &question.options[choice];
        if outcome.correct {
            println!("Corretto! {}\n", picked.explanation);
        } else {
            let right = &question.options[outcome.correct_option];
            println!(
                "Sbagliato. La risposta corretta era {}) {}\n{}\n",
                OPTION_LABELS[outcome.correct_option],
                right.text,
                right.explanation
            );
        }
    }

    let status = session.status();
    let Some(score) = status.score else {
        anyhow::bail!("quiz incompleto");
    };

    println!("Quiz completato!");
    println!(
        "Hai risposto correttamente a {} domand{} su {} ({}%).",
        score.correct,
        if score.correct == 1 { "a" } else { "e" },
        score.total,
        score.percentage
    );
    println!("{}", band_message(score.band));

    Ok(())
}

fn parse_choice(line: &str, options: usize) -> Option<usize> {
    let letter = line.trim().to_ascii_uppercase().chars().next()?;
    let index = OPTION_LABELS.iter().position(|&l| l == letter)?;
    (index < options).then_some(index)
}

fn band_message(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Perfect => "Eccellente! Hai una comprensione perfetta dell'argomento!",
        ScoreBand::High => "Ottimo lavoro! Hai una buona padronanza dell'argomento.",
        ScoreBand::Mid => "Buon risultato! Continua ad approfondire per migliorare.",
        ScoreBand::Low => "Hai bisogno di approfondire. Rileggi gli articoli e riprova!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parsing() {
        assert_eq!(parse_choice("A", 4), Some(0));
        assert_eq!(parse_choice("  d ", 4), Some(3));
        assert_eq!(parse_choice("b", 4), Some(1));
        assert_eq!(parse_choice("E", 4), None);
        assert_eq!(parse_choice("", 4), None);
        assert_eq!(parse_choice("42", 4), None);
    }

    #[test]
    fn band_messages_are_distinct() {
        let bands = [
            ScoreBand::Perfect,
            ScoreBand::High,
            ScoreBand::Mid,
            ScoreBand::Low,
        ];
        let messages: std::collections::BTreeSet<_> =
            bands.iter().map(|&b| band_message(b)).collect();
        assert_eq!(messages.len(), bands.len());
    }
}
