//! Routed pages. Each page orchestrates service calls and renders the
//! result; shared state comes in through context.

pub mod blog_post;
pub mod category;
pub mod create_post;
pub mod dashboard;
pub mod edit_post;
pub mod edit_profile;
pub mod forgot_password;
pub mod home;
pub mod landing;
pub mod login;
pub mod my_profile;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod search;
