pub mod login;
pub mod registration;
