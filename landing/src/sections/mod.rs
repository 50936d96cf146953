// Landing page sections, top to bottom.

mod cta;
mod features;
mod footer;
mod hero;
mod membership;
mod mobile_menu;
mod nav;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use membership::Membership;
pub use mobile_menu::{MenuToggle, MobileMenu};
pub use nav::{Nav, header_class};
