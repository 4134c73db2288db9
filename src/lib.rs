// src/lib.rs

//! Subreddit hot listing fetcher library

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
