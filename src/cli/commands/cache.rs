use std::path::Path;

use crate::cache::{CachePolicy, CacheStore, HttpFetcher, SqliteCacheStore};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Manage the offline asset cache: precache (install), prune stale
/// buckets (activate), show bucket stats.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cache {
        precache,
        prune,
        info: show_info,
    } = cmd
    {
        let store = SqliteCacheStore::open(Path::new(&cfg.store))?;
        let policy = CachePolicy::new(store, HttpFetcher::new(), &cfg.cache_name, &cfg.shell_url());

        if *precache {
            let urls = cfg.precache_urls();
            policy.install(&urls)?;
            success(format!(
                "Precached {} URL(s) into '{}'",
                urls.len(),
                cfg.cache_name
            ));
        }

        if *prune {
            let removed = policy.activate()?;
            success(format!("Removed {removed} stale cache bucket(s)"));
        }

        if *show_info {
            let names = policy.store().cache_names()?;
            if names.is_empty() {
                info("Cache is empty");
            }
            for name in names {
                let marker = if name == cfg.cache_name { "*" } else { " " };
                println!("{} {}  {} entries", marker, name, policy.store().len(&name)?);
            }
        }
    }
    Ok(())
}
