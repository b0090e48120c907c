//! # Screenshot Resolver
//!
//! The screenshot tool names its images after the URL it captured, but the exact scheme
//! depends on how it was invoked. Two conventions are seen in the wild:
//!
//! * `https://a.b.com:8443/x` → `a_b_com_8443_x.png` (scheme dropped, `:/.` flattened)
//! * `https://a.b.com/x` → `https:__a.b.com_x.png` (scheme kept as `https:__`, `/` flattened)
//!
//! The resolver tries each candidate in that order and takes the first file that exists.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

const EXTENSION: &str = ".png";

static SCHEME: OnceLock<Regex> = OnceLock::new();

fn scheme() -> &'static Regex {
    SCHEME.get_or_init(|| Regex::new(r"https?://").expect("scheme pattern is valid"))
}

/// Candidate file names for `url`, most likely first.
pub fn candidates(url: &str) -> Vec<String> {
    let mut names = Vec::with_capacity(3);

    let stripped = scheme().replacen(url, 1, "");
    let flattened: String = stripped
        .chars()
        .map(|c| if matches!(c, ':' | '/' | '.') { '_' } else { c })
        .collect();
    names.push(format!("{flattened}{EXTENSION}"));

    names.push(format!(
        "{}{EXTENSION}",
        scheme().replacen(url, 1, "https:__").replace('/', "_")
    ));

    // Plain-http captures are sometimes written with their own scheme.
    if scheme().find(url).is_some_and(|m| m.as_str() == "http://") {
        names.push(format!(
            "{}{EXTENSION}",
            scheme().replacen(url, 1, "http:__").replace('/', "_")
        ));
    }

    names
}

/// Returns the file name of the first candidate present in `dir`.
pub async fn resolve(url: &str, dir: &Path) -> Option<String> {
    for name in candidates(url) {
        match tokio::fs::try_exists(dir.join(&name)).await {
            Ok(true) => return Some(name),
            Ok(false) => {}
            Err(e) => debug!("Could not stat screenshot {}: {}", name, e),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_candidate_flattens_host_port_and_path() {
        assert_eq!(candidates("https://a.b.com:8443/x")[0], "a_b_com_8443_x.png");
        assert_eq!(candidates("http://10.0.0.1")[0], "10_0_0_1.png");
    }

    #[test]
    fn second_candidate_keeps_an_https_prefix() {
        assert_eq!(candidates("https://a.b.com/x")[1], "https:__a.b.com_x.png");
        assert_eq!(candidates("http://a.b.com/x")[1], "https:__a.b.com_x.png");
    }

    #[test]
    fn http_urls_get_a_third_candidate() {
        let names = candidates("http://a.b.com/x");
        assert_eq!(names.len(), 3);
        assert_eq!(names[2], "http:__a.b.com_x.png");
        assert_eq!(candidates("https://a.b.com").len(), 2);
    }

    #[test]
    fn candidates_never_contain_path_separators() {
        for url in ["https://a/../../etc", "../../x", "ftp://h/p"] {
            let names = candidates(url);
            assert!(names.iter().all(|n| !n.contains('/')), "{names:?}");
        }
    }

    #[tokio::test]
    async fn prefers_the_flattened_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a_b_com_8443_x.png"), b"png").unwrap();
        fs::write(dir.path().join("https:__a.b.com:8443_x.png"), b"png").unwrap();

        let found = resolve("https://a.b.com:8443/x", dir.path()).await;
        assert_eq!(found.as_deref(), Some("a_b_com_8443_x.png"));
    }

    #[tokio::test]
    async fn falls_back_to_the_scheme_prefixed_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("https:__a.b.com_x.png"), b"png").unwrap();

        let found = resolve("https://a.b.com/x", dir.path()).await;
        assert_eq!(found.as_deref(), Some("https:__a.b.com_x.png"));
    }

    #[tokio::test]
    async fn returns_none_without_a_match() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve("https://a.b.com/x", dir.path()).await, None);
        assert_eq!(
            resolve("https://a.b.com/x", &dir.path().join("missing")).await,
            None
        );
    }
}
