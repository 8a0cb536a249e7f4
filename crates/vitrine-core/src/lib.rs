pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod image_set;
pub mod input;
pub mod io;
pub mod observer;
pub mod script;
pub mod scroll_lock;
pub mod shell;
pub mod transform;
