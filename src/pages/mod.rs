// Application routes

mod home;
mod painting;

pub use home::HomePage;
pub use painting::PaintingPage;
