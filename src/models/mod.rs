mod slug;

pub use slug::*;
