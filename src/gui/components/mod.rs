pub mod button;
pub mod card;
pub mod feedback;
pub mod layout;
pub mod navbar;

pub use button::{
    Button,
    ButtonSize,
    ButtonVariant,
};
pub use card::Card;
pub use layout::Layout;
pub use navbar::{
    Navbar,
    NavbarAction,
};
