pub mod card_animated;
pub mod table;
