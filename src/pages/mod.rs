//! Page components, one module per routed view.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod login;
pub mod merchant;
pub mod not_found;
pub mod orders;
pub mod product;
pub mod signup;
pub mod wallet;
