//! Patterns sub-module: observable, lazy_object.

pub mod lazy_object;
pub mod observable;
