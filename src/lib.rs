#![crate_name = "kpl"]

#[macro_use]
extern crate lazy_static;

pub mod kpl_compiler;
