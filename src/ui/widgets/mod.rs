pub mod about;
pub mod carousel;
pub mod contact;
pub mod footer;
pub mod header;
pub mod skills;
