// Landing page sections

mod faq;
mod footer;
mod hero;
mod intro;
mod nav;

pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::Hero;
pub use intro::Intro;
pub use nav::Nav;
