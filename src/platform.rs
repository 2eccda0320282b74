/// Platform family a resolver lays its directories out for.
///
/// Injected at construction so the layout can be pinned independently of the
/// host, e.g. in tests. `Unix` covers Linux, the BSDs, and anything else that
/// follows the XDG fallback paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// The platform this build is targeting.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}
