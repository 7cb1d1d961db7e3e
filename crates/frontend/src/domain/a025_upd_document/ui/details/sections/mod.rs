pub mod document_info;
pub mod positions;

pub use document_info::DocumentInfoSection;
pub use positions::PositionsSection;
