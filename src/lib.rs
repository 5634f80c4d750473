pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod helpers;
pub mod models;
pub mod page;
pub mod repositories;
