pub mod elements;
pub mod page;
pub mod preview;
pub mod render;
pub mod submission;
