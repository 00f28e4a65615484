pub mod access;
pub mod message;
pub mod session;
pub mod theme;
