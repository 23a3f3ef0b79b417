//! Request path → page resolution.

use super::Page;

/// Resolve a decoded request path against a page table.
///
/// Scans `pages` in order and returns the first entry that either:
/// 1. has a URL equal to `path` (`/app.js` == `/app.js`), or
/// 2. has a URL whose part before the first `.` equals `path`
///    (`/app` == `/app.<ext>`).
///
/// Both rules are tried per entry, so an earlier entry's extensionless
/// match beats a later entry's exact match. With `/foo.css` sorted before
/// `/foo.js`, `/foo` always resolves to `/foo.css`.
///
/// Returns `None` when nothing matches; turning that into a 404 is the
/// caller's job.
pub fn find_page<'t, 'a>(pages: &'t [Page<'a>], path: &str) -> Option<&'t Page<'a>> {
    pages.iter().find(|page| matches(page.url, path))
}

#[inline]
fn matches(url: &str, path: &str) -> bool {
    if url.len() == path.len() && url.as_bytes() == path.as_bytes() {
        return true;
    }

    url.find('.')
        .is_some_and(|dot| dot == path.len() && &url.as_bytes()[..dot] == path.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::types;

    fn page(url: &'static str) -> Page<'static> {
        let mime = match url.rsplit('.').next() {
            Some("css") => types::CSS,
            Some("js") => types::JAVASCRIPT,
            _ => types::HTML,
        };
        Page::new(url, b"", mime, true)
    }

    #[test]
    fn test_exact_match() {
        let pages = [page("/"), page("/style.css")];
        let found = find_page(&pages, "/style.css").unwrap();
        assert_eq!(found.url, "/style.css");
        assert_eq!(found.mime, types::CSS);
    }

    #[test]
    fn test_root_exact_match() {
        let pages = [page("/"), page("/style.css")];
        assert_eq!(find_page(&pages, "/").unwrap().url, "/");
    }

    #[test]
    fn test_extensionless_fallback() {
        let pages = [page("/style.css")];
        assert_eq!(find_page(&pages, "/style").unwrap().url, "/style.css");
    }

    #[test]
    fn test_miss() {
        let pages = [page("/"), page("/style.css"), page("/app.js")];
        assert!(find_page(&pages, "/missing").is_none());
        assert!(find_page(&[], "/").is_none());
    }

    #[test]
    fn test_earlier_entry_wins_fallback() {
        let pages = [page("/foo.css"), page("/foo.js")];
        assert_eq!(find_page(&pages, "/foo").unwrap().url, "/foo.css");
        assert_eq!(find_page(&pages, "/foo.js").unwrap().url, "/foo.js");
    }

    #[test]
    fn test_earlier_fallback_beats_later_exact() {
        let pages = [page("/foo.css"), Page::new("/foo", b"", types::HTML, false)];
        assert_eq!(find_page(&pages, "/foo").unwrap().url, "/foo.css");
    }

    #[test]
    fn test_fallback_uses_first_dot() {
        let pages = [page("/app.min.js")];
        assert_eq!(find_page(&pages, "/app").unwrap().url, "/app.min.js");
        assert!(find_page(&pages, "/app.min").is_none());
    }

    #[test]
    fn test_prefix_is_not_enough() {
        let pages = [page("/style.css")];
        assert!(find_page(&pages, "/sty").is_none());
        assert!(find_page(&pages, "/style.").is_none());
        assert!(find_page(&pages, "/style.cssx").is_none());
    }

    #[test]
    fn test_root_has_no_fallback() {
        // "/" has no dot, so an empty request path never matches it.
        let pages = [page("/")];
        assert!(find_page(&pages, "").is_none());
    }
}
