pub mod card;
pub mod collection;

pub use card::Card;
pub use collection::Collection;
