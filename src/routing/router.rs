use std::fmt::{self, Formatter};
use std::sync::Arc;

use crate::handler::Handler;
use crate::http::Request;

use super::filter::{self, Filter, FnFilter, PathFilter};
use super::PathState;

/// A tree of routes. Each node carries filters that must all pass, child
/// routers tried in registration order, and at most one handler that
/// serves the node when the whole path has been consumed.
pub struct Router {
    pub(crate) routers: Vec<Router>,
    pub(crate) filters: Vec<Box<dyn Filter>>,
    pub(crate) handler: Option<Arc<dyn Handler>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! method_router {
    ($($name:ident),*) => {
        $(
            pub fn $name<H: Handler>(self, handler: H) -> Self {
                self.push(Router::with_filter(filter::$name()).handle(handler))
            }
        )*
    };
}

impl Router {
    pub fn new() -> Self {
        Self {
            routers: Vec::new(),
            filters: Vec::new(),
            handler: None,
        }
    }

    pub fn routers(&self) -> &Vec<Router> {
        &self.routers
    }
    pub fn filters(&self) -> &Vec<Box<dyn Filter>> {
        &self.filters
    }

    /// Walks the tree and returns the handler bound to the request, if
    /// any. The path cursor is restored before each sibling is tried.
    pub fn detect(&self, req: &mut Request, path_state: &mut PathState) -> Option<Arc<dyn Handler>> {
        for filter in &self.filters {
            if !filter.filter(req, path_state) {
                return None;
            }
        }

        let original_cursor = path_state.cursor;
        for child in &self.routers {
            if let Some(handler) = child.detect(req, path_state) {
                return Some(handler);
            }
            path_state.cursor = original_cursor;
        }

        if let Some(handler) = &self.handler {
            if path_state.ended() {
                return Some(handler.clone());
            }
        }
        None
    }

    pub fn push(mut self, router: Router) -> Self {
        self.routers.push(router);
        self
    }
    pub fn append(mut self, mut others: Vec<Router>) -> Self {
        self.routers.append(&mut others);
        self
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Router::with_filter(PathFilter::new(path))
    }
    pub fn path(self, path: impl Into<String>) -> Self {
        self.filter(PathFilter::new(path))
    }

    pub fn with_filter(filter: impl Filter + Sized) -> Self {
        Router::new().filter(filter)
    }
    pub fn filter(mut self, filter: impl Filter + Sized) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
    pub fn with_filter_fn<T>(func: T) -> Self
    where
        T: Fn(&mut Request, &mut PathState) -> bool + Send + Sync + 'static,
    {
        Router::with_filter(FnFilter(func))
    }
    pub fn filter_fn<T>(self, func: T) -> Self
    where
        T: Fn(&mut Request, &mut PathState) -> bool + Send + Sync + 'static,
    {
        self.filter(FnFilter(func))
    }

    pub fn handle<H: Handler>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    method_router!(get, post, put, delete, patch, head, options);
}

const SYMBOL_DOWN: &str = "│";
const SYMBOL_TEE: &str = "├";
const SYMBOL_ELL: &str = "└";
const SYMBOL_RIGHT: &str = "─";

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fn print(f: &mut Formatter, prefix: &str, last: bool, router: &Router) -> fmt::Result {
            let mut path = "".to_owned();
            let mut others = Vec::with_capacity(router.filters.len());
            if router.filters.is_empty() {
                path = "!NULL!".to_owned();
            } else {
                for filter in &router.filters {
                    let info = format!("{:?}", filter);
                    if let Some(rest) = info.strip_prefix("path:") {
                        path = rest.to_owned();
                    } else {
                        others.push(info);
                    }
                }
            }
            let cp = if last {
                format!("{}{}{}{}", prefix, SYMBOL_ELL, SYMBOL_RIGHT, SYMBOL_RIGHT)
            } else {
                format!("{}{}{}{}", prefix, SYMBOL_TEE, SYMBOL_RIGHT, SYMBOL_RIGHT)
            };
            let hd = if let Some(handler) = &router.handler {
                format!(" -> {}", handler.type_name())
            } else {
                "".into()
            };
            if !others.is_empty() {
                writeln!(f, "{}{}[{}]{}", cp, path, others.join(","), hd)?;
            } else {
                writeln!(f, "{}{}{}", cp, path, hd)?;
            }
            let routers = router.routers();
            if !routers.is_empty() {
                let np = if last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}{}   ", prefix, SYMBOL_DOWN)
                };
                for (i, router) in routers.iter().enumerate() {
                    print(f, &np, i == routers.len() - 1, router)?;
                }
            }
            Ok(())
        }
        print(f, "", true, self)
    }
}
