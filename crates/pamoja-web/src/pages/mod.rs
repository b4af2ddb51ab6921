//! Page Components

mod admin;
mod landing;
mod login;

pub use admin::AdminDashboard;
pub use landing::LandingPage;
pub use login::LoginPage;
