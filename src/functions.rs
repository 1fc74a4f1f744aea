//! First-class function values: stored in variables, collected in containers,
//! passed as callbacks, and fed argument packs.

use itertools::Itertools;
use std::collections::HashMap;
use std::io::{self, Write};

/// A writer function stored as a plain value.
type Stored = fn(&mut dyn Write) -> io::Result<()>;

/// A function value held in a variable with an explicit function type and
/// invoked indirectly.
pub fn func_ptr(out: &mut dyn Write) -> io::Result<()> {
    let echo: fn(&str) -> String = |s| s.to_string();

    let ret = echo("Hello Rust!");
    writeln!(out, "{}", ret)
}

/// Function values in containers: a map, looked up by key, and a vector, run
/// in insertion order. No-capture closures coerce to plain function pointers.
pub fn func_collection(out: &mut dyn Write) -> io::Result<()> {
    let mut m: HashMap<&str, Stored> = HashMap::new();
    m.insert("func1", |out| writeln!(out, "Run func1"));
    m.insert("func2", |out| writeln!(out, "Run func2"));
    m["func1"](out)?;
    m["func2"](out)?;

    let mut s: Vec<Stored> = Vec::new();
    s.push(|out| writeln!(out, "Run Foo"));
    s.push(|out| writeln!(out, "Run Bar"));
    for f in &s {
        f(out)?;
    }
    Ok(())
}

fn done(out: &mut dyn Write, label: &str) -> io::Result<()> {
    writeln!(out, "'{}' Done", label)
}

/// Callback-style indirection: the callee picks the argument, the caller
/// picks what runs with it.
pub fn callback(out: &mut dyn Write) -> io::Result<()> {
    let apply = |out: &mut dyn Write, cb: fn(&mut dyn Write, &str) -> io::Result<()>| cb(out, "fPtr");

    apply(out, done)
}

/// Prints every integer on one space-joined line.
pub fn print_int_slice(out: &mut dyn Write, a: &[i64]) -> io::Result<()> {
    writeln!(out, "[{}]", a.iter().join(" "))
}

/// Space-joins any number of `Display` arguments onto one line, the closest
/// thing to a variadic print call.
#[macro_export]
macro_rules! print_args {
    ($out:expr, $($arg:expr),+ $(,)?) => {{
        let parts: Vec<String> = vec![$(format!("{}", $arg)),+];
        writeln!($out, "{}", parts.join(" "))
    }};
}

/// The argument-pack demonstration: a slice-consuming helper, then the macro
/// with heterogeneous arguments.
pub fn arg_pack(out: &mut dyn Write) -> io::Result<()> {
    let s = [9487i64, 9527, 5566];

    print_int_slice(out, &s)?;
    crate::print_args!(out, "Hello ", "Rust!", format!("{:?}", s))
}
