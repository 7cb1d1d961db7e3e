pub mod a025_upd_document;
pub mod a026_reception;
pub mod common;
