pub mod page;
pub mod state;
pub mod tabs;
pub mod view_model;
