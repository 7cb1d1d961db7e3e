pub mod a025_upd_document;
