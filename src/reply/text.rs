use hyper::{header::CONTENT_TYPE, http::HeaderValue};

use crate::http::Response;

use super::Reply;

#[non_exhaustive]
pub enum Text<C> {
    /// It will set `content-type` to `text/plain; charset=utf-8`.
    Plain(C),
    /// It will set `content-type` to `application/json; charset=utf-8`.
    Json(C),
    /// It will set `content-type` to `text/html; charset=utf-8`.
    Html(C),
}

impl<C> Text<C>
where
    C: AsRef<str>,
{
    fn set_header(self, res: &mut Response) -> C {
        let (ctype, content) = match self {
            Self::Plain(content) => (
                HeaderValue::from_static("text/plain; charset=utf-8"),
                content,
            ),
            Self::Json(content) => (
                HeaderValue::from_static("application/json; charset=utf-8"),
                content,
            ),
            Self::Html(content) => (
                HeaderValue::from_static("text/html; charset=utf-8"),
                content,
            ),
        };
        res.headers_mut().insert(CONTENT_TYPE, ctype);
        content
    }
}

impl Reply for Text<&'static str> {
    fn render(self, res: &mut Response) {
        let content = self.set_header(res);
        res.write_body(content);
    }
}

impl Reply for Text<String> {
    fn render(self, res: &mut Response) {
        let content = self.set_header(res);
        res.write_body(content);
    }
}

impl<'a> Reply for Text<&'a String> {
    fn render(self, res: &mut Response) {
        let content = self.set_header(res);
        res.write_body(content.as_bytes().to_vec());
    }
}
