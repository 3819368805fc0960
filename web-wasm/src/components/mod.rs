pub mod header;
pub mod timeline_nav;
pub mod artwork_grid;
pub mod artwork_modal;
pub mod empty_message;
