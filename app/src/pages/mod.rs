// Routed pages.

mod dashboard;
mod home;
mod login;
mod themed_example;
mod unauthorized;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use themed_example::ThemedExamplePage;
pub use unauthorized::UnauthorizedPage;
