pub mod countdown;
pub mod layout;
pub mod phase;
pub mod steering;
