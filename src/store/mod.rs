pub mod entity;
pub mod models;
pub mod seed;
