use indexmap::IndexMap;
use tracing::debug;

use crate::page::identity::capitalize_label;

/// Longest domain or path label kept in a derived page name.
pub const LABEL_LIMIT: usize = 20;

/// Outcome of routing a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page_name: String,

    /// The name was derived from the URL during this call
    pub minted: bool,
}

/// Maps URLs to logical page names for one generation run.
///
/// Patterns are tested in insertion order and the first one contained in the
/// URL wins. Unmatched URLs mint a new name from their domain and path,
/// suffixed with a run-wide page index, and register `domain + path` as a new
/// pattern. The pattern map only grows.
#[derive(Debug, Clone, Default)]
pub struct PageRouter {
    url_page_map: IndexMap<String, String>,
    resolved: IndexMap<String, String>,
    page_index: usize,
}

impl PageRouter {
    pub fn new(seed: IndexMap<String, String>) -> Self {
        Self {
            url_page_map: seed,
            resolved: IndexMap::new(),
            page_index: 0,
        }
    }

    /// Resolve `url` to a page name.
    ///
    /// A URL already resolved in this run always gets the same answer, even
    /// when its registered pattern is not a substring of it (ports, userinfo).
    pub fn resolve(&mut self, url: &str) -> Route {
        if let Some(name) = self.resolved.get(url) {
            return Route {
                page_name: name.clone(),
                minted: false,
            };
        }

        if let Some(name) = self.match_pattern(url) {
            self.resolved.insert(url.to_string(), name.clone());
            return Route {
                page_name: name,
                minted: false,
            };
        }

        let (domain, path) = split_url(url);
        let page_name = self.mint_name(&domain, &path);
        let pattern = format!("{}{}", domain, path);
        debug!(url, pattern = %pattern, page = %page_name, "registered new page");

        self.url_page_map
            .entry(pattern)
            .or_insert_with(|| page_name.clone());
        self.resolved.insert(url.to_string(), page_name.clone());

        Route {
            page_name,
            minted: true,
        }
    }

    /// Page name of the first registered pattern contained in `url`.
    pub fn match_pattern(&self, url: &str) -> Option<String> {
        self.url_page_map
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, name)| name.clone())
    }

    pub fn url_page_map(&self) -> &IndexMap<String, String> {
        &self.url_page_map
    }

    /// Number of names minted so far.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    fn mint_name(&mut self, domain: &str, path: &str) -> String {
        let mut labels = domain.split('.');
        let first = labels.next().unwrap_or("");
        let second = labels.next().unwrap_or("");
        let segment = path.split('/').find(|s| !s.is_empty()).unwrap_or("");

        let mut name = String::from("Page");
        if first != "www" {
            name.push_str(&capitalize_label(first, LABEL_LIMIT));
        }
        name.push_str(&capitalize_label(second, LABEL_LIMIT));
        name.push_str(&capitalize_label(segment, LABEL_LIMIT));

        name.push_str(&self.page_index.to_string());
        self.page_index += 1;
        name
    }
}

/// Split a URL into its host and path, dropping scheme, userinfo, port, query
/// and fragment.
pub fn split_url(url: &str) -> (String, String) {
    let rest = match url.find("://") {
        Some(i) => &url[i + 3..],
        None => url,
    };

    let auth_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..auth_end];
    let host = authority.rsplit('@').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");

    let tail = &rest[auth_end..];
    let path = if tail.starts_with('/') {
        let end = tail.find(['?', '#']).unwrap_or(tail.len());
        &tail[..end]
    } else {
        ""
    };

    (host.to_string(), path.to_string())
}
