pub mod about;
pub mod compare;
pub mod dashboard;
pub mod layout;
pub mod settings;
pub mod trends;
