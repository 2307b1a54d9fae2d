// Shared shell components.

mod nav;
mod theme_toggle;

pub use nav::Nav;
pub use theme_toggle::ThemeToggle;
