//! Web search client
//!
//! Scrapes the first organic result from a Google-style results page.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::application::errors::LookupError;
use crate::domain::entities::SearchHit;
use crate::infrastructure::html;
use crate::infrastructure::http::HttpClient;

// Result anchors look like <a href="/url?q=<target>&amp;sa=U..."> ... <h3>title</h3> ... </a>
static RESULT_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a\s[^>]*?href="/url\?q=([^"&]+)[^"]*"[^>]*>(.*?)</a>"#)
        .expect("result link pattern is valid")
});

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<h3[^>]*>(.*?)</h3>").expect("heading pattern is valid")
});

/// Finds the single best result for a query
pub trait SearchEngine: Send + Sync {
    fn top_result(&self, query: &str) -> Result<Option<SearchHit>, LookupError>;
}

pub struct GoogleSearch {
    http: HttpClient,
    search_url: String,
}

impl GoogleSearch {
    pub fn new(http: HttpClient, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
        }
    }

    fn url_for(&self, query: &str) -> String {
        let sep = if self.search_url.contains('?') { '&' } else { '?' };
        format!("{}{}q={}&hl=en", self.search_url, sep, urlencoding::encode(query))
    }
}

impl SearchEngine for GoogleSearch {
    fn top_result(&self, query: &str) -> Result<Option<SearchHit>, LookupError> {
        let page = self.http.get_text(&self.url_for(query))?;
        parse_top_result(&page)
    }
}

/// Extract the first external result from a results page
pub fn parse_top_result(page: &str) -> Result<Option<SearchHit>, LookupError> {
    for caps in RESULT_LINK.captures_iter(page) {
        let Some(heading) = HEADING.captures(&caps[2]) else {
            continue;
        };

        let link = urlencoding::decode(&caps[1])
            .map_err(|e| LookupError::Decode(e.to_string()))?
            .into_owned();

        if !is_external(&link) {
            continue;
        }

        let title = html::to_single_line(&heading[1])?;
        if title.is_empty() {
            continue;
        }

        return Ok(Some(SearchHit { title, link }));
    }

    Ok(None)
}

fn is_external(link: &str) -> bool {
    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return false;
    }

    link.split('/')
        .nth(2)
        .map(|host| !host.contains("google."))
        .unwrap_or(false)
}
