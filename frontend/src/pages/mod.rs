pub mod landing;
mod layout;
pub mod not_found;
mod page_view;
pub mod showcase;
