//! The `selfquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = Path::new("selfquiz.toml");
    if path.exists() {
        println!("selfquiz.toml already exists, skipping.");
        return Ok(());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    println!("Created selfquiz.toml");

    println!("\nNext steps:");
    println!("  1. Edit selfquiz.toml to choose where progress is stored");
    println!("  2. Run: selfquiz generate --file notes.txt");
    println!("  3. Run: selfquiz take --file notes.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# selfquiz configuration

# Where the progress log lives. SELFQUIZ_DATA_DIR and --data-dir override it.
# data_dir = "~/.local/share/selfquiz"
store_key = "userData"

# Question generation
question_count = 5
min_sentence_chars = 11
min_words = 5
max_distractor_draws = 64

# Progress tracking
recommendation_limit = 5
trend_threshold = 5.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = selfquiz_core::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.store_key, "userData");
        assert_eq!(config.question_count, 5);
    }
}
