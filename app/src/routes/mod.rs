pub mod history;
pub mod nav;
