//! The fetch-handling policy: which requests are intercepted and how
//! each class is answered from the network and the cache bucket.

use std::sync::LazyLock;

use regex::Regex;

use super::fetch::{Fetcher, HttpResponse};
use super::store::CacheStore;
use crate::errors::{AppError, AppResult};

/// Extensions treated as static assets (stale-while-revalidate class).
static ASSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(js|css|png|jpg|jpeg|svg|ico|woff2?|ttf|eot)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

/// Request mode, the navigation/subresource split of the original
/// fetch events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Navigation,
    Resource,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub kind: RequestKind,
}

impl Request {
    pub fn navigation(url: &str) -> Self {
        Self {
            method: Method::Get,
            url: url.to_string(),
            kind: RequestKind::Navigation,
        }
    }

    pub fn get(url: &str) -> Self {
        Self {
            method: Method::Get,
            url: url.to_string(),
            kind: RequestKind::Resource,
        }
    }
}

/// Match the URL's path component against the asset extensions,
/// ignoring query string and fragment.
fn is_static_asset(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    ASSET_RE.is_match(path)
}

/// Request interceptor with one versioned cache bucket.
///
/// Every "store in cache" side effect is best-effort: a failed write
/// never blocks returning the response to the caller.
pub struct CachePolicy<S: CacheStore, F: Fetcher> {
    store: S,
    fetcher: F,
    cache_name: String,
    shell_url: String,
}

impl<S: CacheStore, F: Fetcher> CachePolicy<S, F> {
    pub fn new(store: S, fetcher: F, cache_name: &str, shell_url: &str) -> Self {
        Self {
            store,
            fetcher,
            cache_name: cache_name.to_string(),
            shell_url: shell_url.to_string(),
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Install step: eagerly fetch and store the precache list. Any
    /// failure fails the install.
    pub fn install(&self, precache_urls: &[String]) -> AppResult<()> {
        for url in precache_urls {
            let resp = self.fetcher.fetch(url)?;
            self.store.put(&self.cache_name, url, &resp)?;
        }
        Ok(())
    }

    /// Activate step: delete every bucket not matching the current
    /// versioned name. Returns how many buckets were removed.
    pub fn activate(&self) -> AppResult<usize> {
        let mut removed = 0;
        for name in self.store.cache_names()? {
            if name != self.cache_name {
                self.store.delete_cache(&name)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Route one request. `Ok(None)` means the request is not
    /// intercepted (non-GET) and the caller owns it.
    pub fn handle(&self, req: &Request) -> AppResult<Option<HttpResponse>> {
        if req.method != Method::Get {
            return Ok(None);
        }

        match req.kind {
            RequestKind::Navigation => self
                .network_first(&req.url, Some(self.shell_url.clone()))
                .map(Some),
            RequestKind::Resource if is_static_asset(&req.url) => {
                self.stale_while_revalidate(&req.url).map(Some)
            }
            RequestKind::Resource => self.network_first(&req.url, None).map(Some),
        }
    }

    /// Network first; a successful response is cached under the request
    /// key. On network failure fall back to the cache: the shell for
    /// navigations, the exact key otherwise. A double miss is a hard
    /// failure.
    fn network_first(&self, url: &str, shell_fallback: Option<String>) -> AppResult<HttpResponse> {
        match self.fetcher.fetch(url) {
            Ok(resp) => {
                let _ = self.store.put(&self.cache_name, url, &resp);
                Ok(resp)
            }
            Err(_) => {
                let key = shell_fallback.as_deref().unwrap_or(url);
                match self.store.get(&self.cache_name, key) {
                    Ok(Some(cached)) => Ok(cached),
                    _ => Err(AppError::CacheMiss(key.to_string())),
                }
            }
        }
    }

    /// Serve the cached entry if present and refresh it for next time;
    /// a cache miss waits on the network. Refresh failures are
    /// swallowed like any cache-write failure.
    fn stale_while_revalidate(&self, url: &str) -> AppResult<HttpResponse> {
        let cached = self.store.get(&self.cache_name, url).unwrap_or(None);

        if let Some(stale) = cached {
            if let Ok(fresh) = self.fetcher.fetch(url) {
                let _ = self.store.put(&self.cache_name, url, &fresh);
            }
            return Ok(stale);
        }

        let resp = self.fetcher.fetch(url)?;
        let _ = self.store.put(&self.cache_name, url, &resp);
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::cache::store::MemoryCacheStore;

    const CACHE: &str = "progchek-v2";
    const SHELL: &str = "https://app.test/index.html";

    fn resp(url: &str, body: &str) -> HttpResponse {
        HttpResponse {
            url: url.to_string(),
            status: 200,
            content_type: "text/html".to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    /// Fetcher answering from a mutable script; URLs not in the script
    /// fail like a dead network.
    #[derive(Default)]
    struct ScriptedFetcher {
        responses: Mutex<HashMap<String, String>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn serve(&self, url: &str, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), body.to_string());
        }

        fn go_offline(&self) {
            self.responses.lock().unwrap().clear();
        }

        fn calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Fetcher for ScriptedFetcher {
        fn fetch(&self, url: &str) -> AppResult<HttpResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            match self.responses.lock().unwrap().get(url) {
                Some(body) => Ok(resp(url, body)),
                None => Err(AppError::Fetch(format!("connection refused: {url}"))),
            }
        }
    }

    fn policy(fetcher: ScriptedFetcher) -> CachePolicy<MemoryCacheStore, ScriptedFetcher> {
        CachePolicy::new(MemoryCacheStore::new(), fetcher, CACHE, SHELL)
    }

    #[test]
    fn install_precaches_shell() {
        let fetcher = ScriptedFetcher::default();
        fetcher.serve("https://app.test/", "root");
        fetcher.serve(SHELL, "shell");
        let policy = policy(fetcher);

        policy
            .install(&["https://app.test/".to_string(), SHELL.to_string()])
            .unwrap();
        assert_eq!(policy.store().len(CACHE).unwrap(), 2);
    }

    #[test]
    fn install_fails_when_a_precache_fetch_fails() {
        let fetcher = ScriptedFetcher::default();
        fetcher.serve("https://app.test/", "root");
        // shell not served
        let policy = policy(fetcher);

        let err = policy
            .install(&["https://app.test/".to_string(), SHELL.to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }

    #[test]
    fn activate_deletes_stale_buckets_only() {
        let fetcher = ScriptedFetcher::default();
        let policy = policy(fetcher);
        policy.store().put("progchek-v1", "/a", &resp("/a", "old")).unwrap();
        policy.store().put(CACHE, "/a", &resp("/a", "cur")).unwrap();

        assert_eq!(policy.activate().unwrap(), 1);
        assert_eq!(policy.store().cache_names().unwrap(), vec![CACHE]);
        assert!(policy.store().get(CACHE, "/a").unwrap().is_some());
    }

    #[test]
    fn navigation_prefers_network_and_caches_the_copy() {
        let fetcher = ScriptedFetcher::default();
        fetcher.serve("https://app.test/page", "live");
        let policy = policy(fetcher);

        let got = policy
            .handle(&Request::navigation("https://app.test/page"))
            .unwrap()
            .unwrap();
        assert_eq!(got.body, b"live");
        assert_eq!(
            policy
                .store()
                .get(CACHE, "https://app.test/page")
                .unwrap()
                .unwrap()
                .body,
            b"live"
        );
    }

    #[test]
    fn offline_navigation_serves_cached_shell() {
        let fetcher = ScriptedFetcher::default();
        fetcher.serve(SHELL, "shell");
        let policy = policy(fetcher);
        policy.install(&[SHELL.to_string()]).unwrap();

        // the fetcher only knows the shell URL, so any other navigation
        // behaves like a network failure
        let got = policy
            .handle(&Request::navigation("https://app.test/somewhere"))
            .unwrap()
            .unwrap();
        assert_eq!(got.body, b"shell");
    }

    #[test]
    fn offline_navigation_without_shell_is_a_hard_failure() {
        let fetcher = ScriptedFetcher::default();
        let policy = policy(fetcher);
        let err = policy
            .handle(&Request::navigation("https://app.test/page"))
            .unwrap_err();
        assert!(matches!(err, AppError::CacheMiss(_)));
    }

    #[test]
    fn asset_returns_stale_body_then_updated_one() {
        let url = "https://app.test/main.js";
        let fetcher = ScriptedFetcher::default();
        fetcher.serve(url, "v1");
        let policy = policy(fetcher);

        // first request: cache miss, waits on the network
        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"v1");

        // network content changes
        policy.fetcher.serve(url, "v2");

        // second request: stale body now, refreshed entry for next time
        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"v1");

        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"v2");
    }

    #[test]
    fn asset_refresh_failure_is_swallowed() {
        let url = "https://app.test/app.css";
        let fetcher = ScriptedFetcher::default();
        fetcher.serve(url, "cached");
        let policy = policy(fetcher);
        policy.handle(&Request::get(url)).unwrap();

        policy.fetcher.go_offline();
        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"cached");
    }

    #[test]
    fn other_get_falls_back_to_exact_key() {
        let url = "https://app.test/api/data";
        let fetcher = ScriptedFetcher::default();
        fetcher.serve(url, "fresh");
        let policy = policy(fetcher);

        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"fresh");

        policy.fetcher.go_offline();
        let got = policy.handle(&Request::get(url)).unwrap().unwrap();
        assert_eq!(got.body, b"fresh");

        let err = policy
            .handle(&Request::get("https://app.test/api/missing"))
            .unwrap_err();
        assert!(matches!(err, AppError::CacheMiss(_)));
    }

    #[test]
    fn non_get_passes_through() {
        let fetcher = ScriptedFetcher::default();
        let policy = policy(fetcher);
        let req = Request {
            method: Method::Post,
            url: "https://app.test/api/data".to_string(),
            kind: RequestKind::Resource,
        };
        assert!(policy.handle(&req).unwrap().is_none());
        // the network was never touched
        assert_eq!(policy.fetcher.calls(), 0);
    }

    #[test]
    fn asset_classification_ignores_query_strings() {
        assert!(is_static_asset("https://app.test/fonts/inter.woff2"));
        assert!(is_static_asset("https://app.test/main.js?v=3"));
        assert!(is_static_asset("https://app.test/logo.svg#icon"));
        assert!(!is_static_asset("https://app.test/api/data"));
        assert!(!is_static_asset("https://app.test/page.html"));
    }
}
