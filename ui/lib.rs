mod icon;
mod navigation;
mod sidebar;
mod sidebar_boot;
mod sidebar_state;
mod theme;

pub use self::icon::*;
pub use self::navigation::*;
pub use self::sidebar::*;
pub use self::sidebar_boot::*;
pub use self::sidebar_state::*;
pub use self::theme::*;
