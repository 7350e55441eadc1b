mod json;
mod text;

pub use json::Json;
pub use text::Text;

use crate::http::Response;

/// A value that can write itself into a [`Response`].
pub trait Reply {
    fn render(self, res: &mut Response);
}

impl Reply for &'static str {
    fn render(self, res: &mut Response) {
        Text::Plain(self).render(res);
    }
}

impl Reply for String {
    fn render(self, res: &mut Response) {
        Text::Plain(self).render(res);
    }
}
