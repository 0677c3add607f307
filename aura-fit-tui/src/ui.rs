// aura-fit-tui/src/ui.rs
mod builder;
mod dashboard;
mod fallback;
mod layout;
mod modals;
mod nav_bar;
mod placeholders;
mod status_bar;
mod theme;

// Re-export the guarded render entry point
pub use fallback::{inside_render_boundary, render_guarded};
