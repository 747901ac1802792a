//! Terminal front end for the readability viewer

pub mod capabilities;
pub mod keys;
pub mod raw;
pub mod theme;
pub mod view;
pub mod viewer;
