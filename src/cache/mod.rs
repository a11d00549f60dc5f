//! Offline asset cache: a request interceptor with one versioned cache
//! bucket, mirroring a service worker's install/activate/fetch
//! lifecycle. Navigations are network-first with a cached-shell
//! fallback, static assets are stale-while-revalidate, other GETs are
//! network-first with an exact-key fallback. Non-GET requests pass
//! through untouched.

pub mod fetch;
pub mod policy;
pub mod store;

pub use fetch::{Fetcher, HttpFetcher, HttpResponse};
pub use policy::{CachePolicy, Method, Request, RequestKind};
pub use store::{CacheStore, MemoryCacheStore, SqliteCacheStore};
