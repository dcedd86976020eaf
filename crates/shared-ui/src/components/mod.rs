pub mod button;
pub mod card;
pub mod reveal;

pub use button::*;
pub use card::*;
pub use reveal::*;
