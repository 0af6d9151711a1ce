pub mod apply;
pub mod check;
pub mod interactive;
pub mod project_root;
pub mod setup;
pub mod show;
