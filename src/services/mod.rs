pub mod registry;
pub mod slug;
pub mod transliterate;
