use std::{fs::File, path::Path};

use anyhow::Context as _;
use env_logger::{Builder, Env, Target};

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

/// Logs to stderr, for commands that do not take over the terminal.
pub(crate) fn init_stderr() {
    builder().init();
}

/// Logs to `path` while the TUI owns the terminal. Without a path, logging stays off.
pub(crate) fn init_file(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    builder().target(Target::Pipe(Box::new(file))).init();
    Ok(())
}
