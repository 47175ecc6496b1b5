//! The `selfquiz take` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use selfquiz_core::session::AssessmentSession;

use super::generate::print_question;
use super::GlobalArgs;

pub async fn execute(
    global: &GlobalArgs,
    file: PathBuf,
    content_type: Option<String>,
    seed: Option<u64>,
    answers: Option<String>,
) -> Result<()> {
    let mut ctx = super::load_quiz(global, &file, content_type.as_deref(), seed).await?;

    let answers = match answers {
        Some(list) => parse_answer_list(ctx.session(), &list)?,
        None => {
            let stdin = std::io::stdin();
            ask_interactively(ctx.session(), stdin.lock())?
        }
    };

    let outcome = ctx.submit(answers)?;
    println!("{}", outcome.submission.results_line());
    println!();
    println!("{}", outcome.recommendations);
    Ok(())
}

/// Parse `--answers`: one comma-separated entry per question, empty for
/// unanswered.
fn parse_answer_list(session: &AssessmentSession, list: &str) -> Result<Vec<Option<String>>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .enumerate()
        .map(|(i, choice)| -> Result<Option<String>> {
            if choice.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(session.answer_for_choice(i, choice)?))
            }
        })
        .collect()
}

/// Ask each question on stdout and read choices from `input`. Invalid
/// choices are asked again; end of input leaves the rest unanswered.
fn ask_interactively<R: BufRead>(
    session: &AssessmentSession,
    input: R,
) -> Result<Vec<Option<String>>> {
    let mut lines = input.lines();
    let mut answers = Vec::with_capacity(session.len());
    let mut stdout = std::io::stdout();

    'questions: for (i, question) in session.questions().iter().enumerate() {
        print_question(i, question);
        loop {
            print!("Your answer (blank to skip): ");
            stdout.flush()?;
            let Some(line) = lines.next() else {
                println!();
                break 'questions;
            };
            let line = line.context("failed to read answer")?;
            if line.trim().is_empty() {
                answers.push(None);
                break;
            }
            match session.answer_for_choice(i, &line) {
                Ok(answer) => {
                    answers.push(Some(answer));
                    break;
                }
                Err(e) => println!("{e}"),
            }
        }
        println!();
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use selfquiz_core::Question;

    fn session() -> AssessmentSession {
        let question = |answer: &str| Question {
            prompt: format!("Fill in the blank: \"_____ {answer}\""),
            options: vec![
                answer.to_string(),
                format!("{answer}x"),
                format!("{answer}y"),
                format!("{answer}z"),
            ],
            correct_option: answer.to_string(),
        };
        AssessmentSession::new(vec![question("alpha"), question("beta")])
    }

    #[test]
    fn answer_list_maps_choices() {
        let answers = parse_answer_list(&session(), "a, 3").unwrap();
        assert_eq!(
            answers,
            vec![Some("alpha".to_string()), Some("betay".to_string())]
        );
    }

    #[test]
    fn answer_list_blanks_are_unanswered() {
        assert_eq!(parse_answer_list(&session(), "").unwrap(), vec![]);
        assert_eq!(
            parse_answer_list(&session(), ",b").unwrap(),
            vec![None, Some("betax".to_string())]
        );
    }

    #[test]
    fn answer_list_rejects_bad_choice() {
        let err = parse_answer_list(&session(), "a,7").unwrap_err();
        assert!(err.to_string().contains("invalid choice '7' for question 2"));
    }

    #[test]
    fn interactive_retries_and_stops_at_eof() {
        let input = std::io::Cursor::new("x\nd\n");
        let answers = ask_interactively(&session(), input).unwrap();
        assert_eq!(answers, vec![Some("alphaz".to_string())]);
    }
}
