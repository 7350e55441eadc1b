use std::fmt::{self, Formatter};

use hyper::Method;

use crate::http::Request;
use crate::routing::PathState;

/// Route predicate, checked at detection time. Path filters advance the
/// [`PathState`] cursor past the segments they match.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    fn filter(&self, req: &mut Request, path: &mut PathState) -> bool;
}

#[derive(Copy, Clone)]
pub struct FnFilter<F>(pub F);

impl<F> Filter for FnFilter<F>
where
    F: Fn(&mut Request, &mut PathState) -> bool + Send + Sync + 'static,
{
    fn filter(&self, req: &mut Request, path: &mut PathState) -> bool {
        self.0(req, path)
    }
}
impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fn:fn")
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MethodFilter(pub Method);

impl Filter for MethodFilter {
    fn filter(&self, req: &mut Request, _path: &mut PathState) -> bool {
        req.method() == &self.0
    }
}
impl fmt::Debug for MethodFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "method:{:?}", self.0)
    }
}

/// Matches a literal path, one segment at a time. No captures and no
/// wildcards: the sample API binds fixed routes only.
#[derive(Clone)]
pub struct PathFilter {
    raw: String,
    parts: Vec<String>,
}

impl PathFilter {
    pub fn new(path: impl Into<String>) -> Self {
        let raw = path.into();
        let parts = raw
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|p| !p.is_empty())
            .map(|p| p.to_owned())
            .collect();
        PathFilter { raw, parts }
    }
}

impl Filter for PathFilter {
    fn filter(&self, _req: &mut Request, state: &mut PathState) -> bool {
        for (i, part) in self.parts.iter().enumerate() {
            if state.parts.get(state.cursor + i) != Some(part) {
                return false;
            }
        }
        state.forward(self.parts.len());
        true
    }
}
impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "path:{}", self.raw)
    }
}

pub fn path(path: impl Into<String>) -> PathFilter {
    PathFilter::new(path)
}
pub fn get() -> MethodFilter {
    MethodFilter(Method::GET)
}
pub fn head() -> MethodFilter {
    MethodFilter(Method::HEAD)
}
pub fn options() -> MethodFilter {
    MethodFilter(Method::OPTIONS)
}
pub fn post() -> MethodFilter {
    MethodFilter(Method::POST)
}
pub fn patch() -> MethodFilter {
    MethodFilter(Method::PATCH)
}
pub fn put() -> MethodFilter {
    MethodFilter(Method::PUT)
}
pub fn delete() -> MethodFilter {
    MethodFilter(Method::DELETE)
}
