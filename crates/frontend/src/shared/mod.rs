pub mod components;
pub mod config;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod theme;
