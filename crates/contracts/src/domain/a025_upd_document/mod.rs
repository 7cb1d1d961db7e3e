pub mod aggregate;
pub mod dto;

pub use aggregate::{UpdDocument, UpdDocumentId};
pub use dto::{CounterpartyRef, SubdivisionRef, UpdDocumentDetailDto};
