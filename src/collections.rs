//! Arrays, slices and maps.
//!
//! Fixed-size sub-range extraction, growable vectors built two ways, and
//! sorted enumeration of a hash map.

use std::collections::HashMap;
use std::io::{self, Write};

/// Slicing a fixed-size array: whole, full range, sub-range, suffix, prefix.
pub fn arr(out: &mut dyn Write) -> io::Result<()> {
    let arr = [183, 9572, 5566, 9487, 7788];
    writeln!(out, "arr = {:?}", arr)?;
    writeln!(out, "arr[..] = {:?}", &arr[..])?;
    // The label says 1..3 but the range is 1..2: the published transcript
    // expects the single element [9572], so the mismatch stays as-is.
    writeln!(out, "arr[1..3] = {:?}", &arr[1..2])?;
    writeln!(out, "arr[2..] = {:?}", &arr[2..])?;
    writeln!(out, "arr[..3] = {:?}", &arr[..3])?;
    Ok(())
}

/// A growable vector built two ways: pre-sized then assigned by index, and
/// from a literal. Both are enumerated with indices.
pub fn slice(out: &mut dyn Write) -> io::Result<()> {
    let mut s = vec![0i64; 3];
    s[0] = 9527;
    s[1] = 5566;
    s[2] = 9487;

    for (i, v) in s.iter().enumerate() {
        writeln!(out, "s[{}] = {}", i, v)?;
    }

    // or
    let ss = [9527, 5566, 9487];
    for (i, v) in ss.iter().enumerate() {
        writeln!(out, "ss[{}] = {}", i, v)?;
    }
    Ok(())
}

/// Populate a hash map, then enumerate it in sorted key order. Hash order is
/// arbitrary, so the keys are collected and sorted for a stable transcript.
pub fn map(out: &mut dyn Write) -> io::Result<()> {
    let mut m = HashMap::new();
    m.insert("FOO", "foo");
    m.insert("BAR", "bar");
    m.insert("BAZ", "baz");

    let mut keys: Vec<&str> = m.keys().copied().collect();
    keys.sort_unstable();
    for k in keys {
        writeln!(out, "m[{}] = {}", k, m[k])?;
    }
    Ok(())
}
