pub mod api;
pub mod close_timer;
pub mod context;
pub mod header;
pub mod mega_menu;
pub mod mobile_menu;
pub mod region;
pub mod state;

pub use context::{use_header, HeaderContext};
pub use header::NavigationHeader;
pub use mega_menu::{DesktopNav, ProductsDropdown};
pub use mobile_menu::{MobileActions, MobileMenu};
