//! The `selfquiz generate` command.

use std::path::PathBuf;

use anyhow::Result;

use selfquiz_core::session::option_label;
use selfquiz_core::Question;

use super::GlobalArgs;

pub async fn execute(
    global: &GlobalArgs,
    file: PathBuf,
    content_type: Option<String>,
    seed: Option<u64>,
    show_content: bool,
) -> Result<()> {
    let ctx = super::load_quiz(global, &file, content_type.as_deref(), seed).await?;

    if show_content {
        println!("{}\n", ctx.content().trim_end());
    }

    let questions = ctx.session().questions();
    if questions.is_empty() {
        println!("No questions could be generated from {}", file.display());
        return Ok(());
    }

    println!("Generated {} question(s):", questions.len());
    for (i, question) in questions.iter().enumerate() {
        println!();
        print_question(i, question);
    }
    Ok(())
}

pub fn print_question(index: usize, question: &Question) {
    println!("{}. {}", index + 1, question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        println!("   {}) {}", option_label(i), option);
    }
}
