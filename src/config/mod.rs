// src/config/mod.rs

pub mod gf3_config;

pub use gf3_config::Gf3Config;
