pub mod button;
pub mod footer;
pub mod header;
pub mod logo;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use footer::Footer;
pub use header::Header;
pub use logo::LogoSource;
