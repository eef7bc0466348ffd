//! Request middleware.

pub mod request_ext;
pub mod set_page;

pub use request_ext::RequestExt;
pub use set_page::{bind_page, SetPage};
