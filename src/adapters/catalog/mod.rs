//! Question catalog adapters.

mod static_catalog;

pub use static_catalog::StaticQuestionCatalog;
