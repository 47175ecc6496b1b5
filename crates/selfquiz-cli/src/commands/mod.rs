pub mod dashboard;
pub mod generate;
pub mod history;
pub mod init;
pub mod recommend;
pub mod take;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use selfquiz_core::config::load_config_from;
use selfquiz_core::session::QuizContext;
use selfquiz_core::store::JsonFileStore;
use selfquiz_core::QuizConfig;

/// Options shared by every subcommand.
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// Load the config and apply the `--data-dir` override.
    pub fn config(&self) -> Result<QuizConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");
        Ok(config)
    }

    /// A quiz context over the configured file store.
    pub fn context(&self) -> Result<QuizContext<JsonFileStore>> {
        let config = self.config()?;
        let store = JsonFileStore::in_dir(&config.data_dir, &config.store_key);
        Ok(QuizContext::new(store, &config))
    }
}

pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Extract `file` and load it into a fresh context.
pub async fn load_quiz(
    global: &GlobalArgs,
    file: &Path,
    content_type: Option<&str>,
    seed: Option<u64>,
) -> Result<QuizContext<JsonFileStore>> {
    let mut ctx = global.context()?;
    let content = selfquiz_extract::extract_file(file, content_type).await?;
    let session = ctx.load_document(content, &mut rng(seed));
    tracing::info!(questions = session.len(), "generated questions");
    Ok(ctx)
}
