//! Stdout-facing wrappers over the demonstration writers, shaped for registry
//! storage: zero arguments, failures bubbled up to the caller as fatal.

use std::io::{self, Write};
use std::path::Path;

use crate::error::DemoError;
use crate::{
    cleanup, collections, composition, concurrency, files, functions, polymorphism, README,
};

fn to_stdout(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    f(&mut lock)?;
    lock.flush()?;
    Ok(())
}

pub fn arr() -> Result<(), DemoError> {
    to_stdout(collections::arr)
}

pub fn slice() -> Result<(), DemoError> {
    to_stdout(collections::slice)
}

pub fn map() -> Result<(), DemoError> {
    to_stdout(collections::map)
}

pub fn deferred_close() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    cleanup::deferred_close(Path::new(README), &mut lock)
}

pub fn timer() -> Result<(), DemoError> {
    to_stdout(cleanup::timer)
}

pub fn func_ptr() -> Result<(), DemoError> {
    to_stdout(functions::func_ptr)
}

pub fn func_collection() -> Result<(), DemoError> {
    to_stdout(functions::func_collection)
}

pub fn callback() -> Result<(), DemoError> {
    to_stdout(functions::callback)
}

pub fn arg_pack() -> Result<(), DemoError> {
    to_stdout(functions::arg_pack)
}

pub fn read_file() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    files::read_file(Path::new(README), &mut lock)
}

pub fn structs() -> Result<(), DemoError> {
    to_stdout(composition::structs)
}

pub fn methods() -> Result<(), DemoError> {
    to_stdout(composition::methods)
}

pub fn duck_type() -> Result<(), DemoError> {
    to_stdout(polymorphism::duck_type)
}

pub fn fan_out_fan_in() -> Result<(), DemoError> {
    to_stdout(concurrency::fan_out_fan_in)
}
