pub mod auth;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod github;
pub mod output;
pub mod run;
