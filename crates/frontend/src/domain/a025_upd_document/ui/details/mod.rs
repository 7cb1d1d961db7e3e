//! Карточка УПД (MVVM)
//!
//! - model.rs: запросы к backend
//! - view_model.rs: состояние страницы и производные сигналы
//! - page.rs: страница с заголовком и состояниями загрузки/ошибки
//! - sections/: блоки «Информация о документе» и «Позиции документа»

pub mod model;
pub mod page;
pub mod sections;
pub mod view_model;

pub use page::UpdDocumentDetail;
