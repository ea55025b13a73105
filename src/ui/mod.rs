#[cfg(feature = "desktop")]
pub mod desktop;

// Common UI components and utilities
pub mod components;
pub mod text;
