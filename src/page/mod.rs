//! Runtime page table: descriptors for embedded web assets.
//!
//! Generated sources declare one `static` byte array per asset plus an
//! ordered `PAGES` table of [`Page`] descriptors. At request time the
//! serving code hands the decoded path to [`find_page`].
//!
//! ```ignore
//! pub static PAGES: [pagepack::Page<'static>; 2] = [
//!     pagepack::Page::new("/", &INDEX_HTML_GZ, "text/html", true),
//!     pagepack::Page::new("/app.js", &APP_NOGZ_JS, "application/javascript", false),
//! ];
//!
//! match pagepack::find_page(&PAGES, "/app") {
//!     Some(page) => respond(page.mime, page.content_encoding(), page.data),
//!     None => not_found(),
//! }
//! ```

mod mime;
mod route;

pub use mime::{AssetType, types};
pub use route::find_page;

/// Descriptor of one embedded asset.
///
/// `gzip` and `data` always agree: when `gzip` is set the bytes are a
/// complete gzip stream of the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Request URL (e.g., "/" or "/style.css")
    pub url: &'a str,
    /// Stored bytes, compressed when `gzip` is set
    pub data: &'a [u8],
    /// Content-Type header value
    pub mime: &'a str,
    /// Whether `data` is gzip-compressed
    pub gzip: bool,
}

impl<'a> Page<'a> {
    pub const fn new(url: &'a str, data: &'a [u8], mime: &'a str, gzip: bool) -> Self {
        Self {
            url,
            data,
            mime,
            gzip,
        }
    }

    /// Length of the stored bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `Content-Encoding` header value for the stored bytes.
    #[inline]
    pub const fn content_encoding(&self) -> Option<&'static str> {
        if self.gzip { Some("gzip") } else { None }
    }
}

/// Ordered, read-only view over a page table.
///
/// Order is significant: lookups are first-match-wins.
#[derive(Debug, Clone, Copy)]
pub struct PageTable<'t, 'a> {
    pages: &'t [Page<'a>],
}

impl<'t, 'a> PageTable<'t, 'a> {
    pub const fn new(pages: &'t [Page<'a>]) -> Self {
        Self { pages }
    }

    /// Resolve a request path. See [`find_page`].
    #[inline]
    pub fn find(&self, path: &str) -> Option<&'t Page<'a>> {
        find_page(self.pages, path)
    }

    pub const fn len(&self) -> usize {
        self.pages.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static INDEX: [u8; 3] = [0x1f, 0x8b, 0x08];
    static APP: [u8; 4] = *b"f();";

    static PAGES: [Page<'static>; 2] = [
        Page::new("/", &INDEX, types::HTML, true),
        Page::new("/app.js", &APP, types::JAVASCRIPT, false),
    ];

    #[test]
    fn test_page_len() {
        assert_eq!(PAGES[0].len(), 3);
        assert_eq!(PAGES[1].len(), 4);
        assert!(!PAGES[1].is_empty());
    }

    #[test]
    fn test_content_encoding_follows_gzip_flag() {
        assert_eq!(PAGES[0].content_encoding(), Some("gzip"));
        assert_eq!(PAGES[1].content_encoding(), None);
    }

    #[test]
    fn test_table_find() {
        let table = PageTable::new(&PAGES);
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("/app").map(|p| p.url), Some("/app.js"));
        assert_eq!(table.find("/").map(|p| p.mime), Some(types::HTML));
        assert!(table.find("/missing").is_none());
    }

    #[test]
    fn test_table_is_usable_from_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| find_page(&PAGES, "/app").map(|p| p.url)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("/app.js"));
        }
    }
}
