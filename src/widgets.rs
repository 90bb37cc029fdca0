pub mod popup;
pub mod scrollbar;
pub mod text;
