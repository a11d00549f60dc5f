use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config directory, config file, and store file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;
    Ok(())
}
