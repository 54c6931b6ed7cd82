pub mod affordance;
pub mod config;
pub mod link;
