use super::Version;
use crate::page::{stream_records, Page, PageLimits, PageRequest};
use crate::resources::{Instance, ResourceKind, Solution};
use crate::search::{PageOptions, QueryParams};
use crate::{BoxStream, Result};
use futures::TryStreamExt;
use std::marker::PhantomData;
use tracing::debug;

/// A collection endpoint such as `/Accounts/{account_sid}/Recordings.json`.
///
/// `F` is the filter type accepted by the collection; collections without
/// filters use `()`.
pub struct ResourceList<K, F = ()> {
    version: Version,
    uri: String,
    solution: Solution,
    _marker: PhantomData<fn() -> (K, F)>,
}

impl<K: ResourceKind, F: QueryParams> ResourceList<K, F> {
    pub(crate) fn new(version: Version, uri: String, solution: Solution) -> Self {
        Self {
            version,
            uri,
            solution,
            _marker: PhantomData,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    fn request(&self, filters: &F, paging: &PageOptions) -> PageRequest {
        let mut params = filters.query_pairs();
        params.extend(paging.query_pairs());
        PageRequest {
            url: self.version.url(&self.uri),
            params,
        }
    }

    /// Fetch exactly one page, now.
    pub async fn page(&self, filters: &F, paging: PageOptions) -> Result<Page<K>> {
        let request = self.request(filters, &paging);
        let payload = self.version.get(&request.url, &request.params).await?;
        Page::from_response(&self.version, &payload, &self.solution)
    }

    /// Lazily yield records across pages. No request is sent until the stream
    /// is polled, and pages are fetched only as earlier ones are consumed.
    pub fn stream(&self, filters: &F, limit: Option<usize>, page_size: Option<u32>) -> BoxStream<'static, Instance<K>> {
        let limits = PageLimits::new(limit, page_size);
        debug!(resource = K::NAME, ?limits, "streaming records");

        let paging = PageOptions {
            page_size: limits.page_size,
            ..PageOptions::default()
        };
        let first = self.request(filters, &paging);
        stream_records(self.version.clone(), first, limits, self.solution.clone())
    }

    /// Collect [`stream`](Self::stream) eagerly.
    pub async fn list(&self, filters: &F, limit: Option<usize>, page_size: Option<u32>) -> Result<Vec<Instance<K>>> {
        self.stream(filters, limit, page_size).try_collect().await
    }
}

/// A single addressable resource such as `/Accounts/{account_sid}/Recordings/{sid}.json`.
pub struct ResourceContext<K> {
    version: Version,
    uri: String,
    solution: Solution,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> ResourceContext<K> {
    pub(crate) fn new(version: Version, uri: String, solution: Solution) -> Self {
        Self {
            version,
            uri,
            solution,
            _kind: PhantomData,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub async fn fetch(&self) -> Result<Instance<K>> {
        let payload = self.version.get(&self.version.url(&self.uri), &[]).await?;
        Instance::from_payload(&payload, &self.solution)
    }
}
