use std::io::Write;
use std::path::Path;

use crate::cache::{CachePolicy, HttpFetcher, Request, SqliteCacheStore};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Fetch a URL through the offline cache policy and print the body.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch { url, navigate } = cmd {
        let store = SqliteCacheStore::open(Path::new(&cfg.store))?;
        let policy = CachePolicy::new(store, HttpFetcher::new(), &cfg.cache_name, &cfg.shell_url());

        let request = if *navigate {
            Request::navigation(url)
        } else {
            Request::get(url)
        };

        match policy.handle(&request)? {
            Some(resp) => {
                std::io::stdout().write_all(&resp.body)?;
            }
            None => warning("Request not intercepted (non-GET)"),
        }
    }
    Ok(())
}
