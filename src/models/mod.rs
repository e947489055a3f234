pub mod activity;
pub mod seed;

pub use activity::Activity;
