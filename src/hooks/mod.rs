pub mod use_animate;
pub mod use_auth;
pub mod use_fetch;
pub mod use_section;
