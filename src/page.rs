//! Pages of records and lazy traversal across them.

use crate::client::Version;
use crate::resources::{Instance, ResourceKind, Solution};
use crate::{BoxStream, Error, Result};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tracing::debug;

/// Largest page the API serves.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination metadata keys that sit beside the records array.
const META_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "last_page_uri",
    "next_page_uri",
    "num_pages",
    "page",
    "page_size",
    "previous_page_uri",
    "start",
    "total",
    "uri",
];

/// Effective paging for a bounded or unbounded traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub limit: Option<usize>,
    pub page_size: Option<u32>,
    /// Upper bound on page requests, derived from `limit`.
    pub page_limit: Option<usize>,
}

impl PageLimits {
    /// With a limit but no page size, pages are sized `min(limit, 1000)` so a
    /// small limit is met in one request.
    pub fn new(limit: Option<usize>, page_size: Option<u32>) -> Self {
        let page_size = page_size.filter(|size| *size > 0);
        match limit {
            None => Self {
                limit: None,
                page_size,
                page_limit: None,
            },
            Some(0) => Self {
                limit: Some(0),
                page_size,
                page_limit: Some(0),
            },
            Some(limit) => {
                let size = page_size.unwrap_or_else(|| limit.min(MAX_PAGE_SIZE as usize) as u32);
                Self {
                    limit: Some(limit),
                    page_size: Some(size),
                    page_limit: Some(limit.div_ceil(size as usize)),
                }
            }
        }
    }
}

/// One page of decoded records plus the cursors around it.
#[derive(Debug)]
pub struct Page<K: ResourceKind> {
    records: Vec<Instance<K>>,
    next_page_uri: Option<String>,
    previous_page_uri: Option<String>,
    first_page_uri: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
    solution: Solution,
    version: Version,
}

impl<K: ResourceKind> Page<K> {
    /// Decode a list response fetched through `version`. Every record is
    /// decoded with `solution` as its explicit identity parameters.
    pub fn from_response(version: &Version, payload: &Value, solution: &Solution) -> Result<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| Error::malformed(K::NAME, "<root>"))?;

        let meta = object.get("meta").and_then(Value::as_object);
        let records_key = records_key::<K>(object, meta)?;
        let raw_records = object
            .get(records_key.as_str())
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed(K::NAME, records_key.clone()))?;

        let records = raw_records
            .iter()
            .map(|record| Instance::<K>::from_payload(record, solution))
            .collect::<Result<Vec<_>>>()?;

        // v1-style bodies keep their cursors under `meta`, as absolute URLs.
        let cursors = meta.unwrap_or(object);
        let cursor = |uri_key: &str, url_key: &str| {
            non_empty(cursors.get(uri_key)).or_else(|| non_empty(cursors.get(url_key)))
        };

        Ok(Self {
            records,
            next_page_uri: cursor("next_page_uri", "next_page_url"),
            previous_page_uri: cursor("previous_page_uri", "previous_page_url"),
            first_page_uri: cursor("first_page_uri", "first_page_url"),
            page: cursors.get("page").and_then(Value::as_u64),
            page_size: cursors.get("page_size").and_then(Value::as_u64),
            solution: solution.clone(),
            version: version.clone(),
        })
    }

    pub fn records(&self) -> &[Instance<K>] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Instance<K>> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }

    pub fn previous_page_uri(&self) -> Option<&str> {
        self.previous_page_uri.as_deref()
    }

    pub fn first_page_uri(&self) -> Option<&str> {
        self.first_page_uri.as_deref()
    }

    pub fn page_number(&self) -> Option<u64> {
        self.page
    }

    pub fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Fetch the page after this one, or `None` on the last page.
    pub async fn next_page(&self) -> Result<Option<Page<K>>> {
        self.follow(self.next_page_uri.as_deref()).await
    }

    /// Fetch the page before this one, or `None` on the first page.
    pub async fn previous_page(&self) -> Result<Option<Page<K>>> {
        self.follow(self.previous_page_uri.as_deref()).await
    }

    async fn follow(&self, uri: Option<&str>) -> Result<Option<Page<K>>> {
        let Some(uri) = uri else {
            return Ok(None);
        };
        let payload = self.version.get(&self.version.absolute_url(uri), &[]).await?;
        Page::from_response(&self.version, &payload, &self.solution).map(Some)
    }
}

fn records_key<K: ResourceKind>(object: &Map<String, Value>, meta: Option<&Map<String, Value>>) -> Result<String> {
    if let Some(key) = meta.and_then(|m| m.get("key")).and_then(Value::as_str) {
        return Ok(key.to_string());
    }
    if object.contains_key(K::LIST_KEY) {
        return Ok(K::LIST_KEY.to_string());
    }
    let mut candidates = object
        .keys()
        .filter(|k| k.as_str() != "meta" && !META_KEYS.contains(&k.as_str()));
    match (candidates.next(), candidates.next()) {
        (Some(key), None) => Ok(key.clone()),
        _ => Err(Error::malformed(K::NAME, K::LIST_KEY)),
    }
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A page request not yet sent.
#[derive(Debug, Clone)]
pub(crate) struct PageRequest {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

struct Cursor<K: ResourceKind> {
    version: Version,
    solution: Solution,
    limits: PageLimits,
    pending: VecDeque<Instance<K>>,
    next: Option<PageRequest>,
    yielded: usize,
    pages: usize,
}

impl<K: ResourceKind> Cursor<K> {
    fn limit_reached(&self) -> bool {
        self.limits.limit.is_some_and(|limit| self.yielded >= limit)
    }

    fn page_limit_reached(&self) -> bool {
        self.limits.page_limit.is_some_and(|limit| self.pages >= limit)
    }

    async fn fetch(&mut self, request: PageRequest) -> Result<()> {
        debug!(resource = K::NAME, page = self.pages + 1, "fetching page");
        let payload = self.version.get(&request.url, &request.params).await?;
        let page = Page::<K>::from_response(&self.version, &payload, &self.solution)?;
        self.pages += 1;
        self.next = page
            .next_page_uri
            .as_deref()
            .map(|uri| PageRequest {
                url: self.version.absolute_url(uri),
                params: Vec::new(),
            });
        self.pending.extend(page.records);
        Ok(())
    }
}

/// Lazily walk pages starting at `first`. Pages are requested only when the
/// records already fetched are used up, and never past `limits`.
pub(crate) fn stream_records<K: ResourceKind>(
    version: Version,
    first: PageRequest,
    limits: PageLimits,
    solution: Solution,
) -> BoxStream<'static, Instance<K>> {
    let cursor = Cursor::<K> {
        version,
        solution,
        limits,
        pending: VecDeque::new(),
        next: Some(first),
        yielded: 0,
        pages: 0,
    };

    let stream = futures::stream::unfold(cursor, |mut cursor| async move {
        loop {
            if cursor.limit_reached() {
                return None;
            }
            if let Some(record) = cursor.pending.pop_front() {
                cursor.yielded += 1;
                return Some((Ok(record), cursor));
            }
            if cursor.page_limit_reached() {
                return None;
            }
            let request = cursor.next.take()?;
            if let Err(e) = cursor.fetch(request).await {
                // `next` is already cleared, so the stream ends after the error.
                return Some((Err(e), cursor));
            }
        }
    });
    Box::pin(stream)
}
