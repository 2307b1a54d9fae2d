// Reactive state stores, provided once via Leptos context.

mod session;
mod theme;

pub use session::SessionStore;
pub use theme::ThemeStore;
