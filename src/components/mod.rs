//! Reusable components: the route guard, the shared layout chrome, and
//! the cards/sections pages compose.

pub mod blog_card;
pub mod comment_section;
pub mod google_signin;
pub mod guard;
pub mod image_picker;
pub mod main_layout;
pub mod navbar;
