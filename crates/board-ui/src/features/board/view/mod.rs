//! Board screens.
mod detail;
mod form;
mod list;
mod toolbar;

pub(crate) use detail::PostDetailPage;
pub(crate) use form::{FormMode, PostFormPage};
pub(crate) use list::PostListPage;
