pub mod filter;
mod router;

pub use filter::{Filter, FnFilter, MethodFilter, PathFilter};
pub use router::Router;

/// Cursor over the percent-decoded segments of a request path. Filters
/// consume segments as they match.
pub struct PathState {
    pub(crate) parts: Vec<String>,
    pub(crate) cursor: usize,
}

impl PathState {
    pub fn new(url_path: &str) -> Self {
        let parts = url_path
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|p| !p.is_empty())
            .map(decode_url_path_safely)
            .collect::<Vec<_>>();
        PathState { parts, cursor: 0 }
    }

    pub fn pick(&self) -> Option<&str> {
        self.parts.get(self.cursor).map(|s| &**s)
    }

    pub fn forward(&mut self, steps: usize) {
        self.cursor += steps;
    }

    pub fn ended(&self) -> bool {
        self.cursor >= self.parts.len()
    }
}

fn decode_url_path_safely(path: &str) -> String {
    percent_encoding::percent_decode_str(path)
        .decode_utf8_lossy()
        .to_string()
}
