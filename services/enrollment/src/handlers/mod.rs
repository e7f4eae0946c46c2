pub mod health;
pub mod profile;
pub mod registration;
pub mod selection;
pub mod token;
