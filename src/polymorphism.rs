//! One capability set, several unrelated concrete types.
//!
//! Client code drives every duck through `&dyn Duck`; each variant answers
//! with its own identity and attributes, never a shared default.

use itertools::Itertools;
use std::io::{self, Write};

/// Shared base data embedded in every concrete duck.
pub struct DuckProto {
    pub age: u32,
    pub friends: Vec<&'static str>,
}

pub struct DonaldDuck {
    pub proto: DuckProto,
    pub family: Vec<&'static str>,
}

pub struct DaffyDuck {
    pub proto: DuckProto,
    pub species: &'static str,
}

/// The capability set: anything that walks, swims and talks is a duck.
pub trait Duck {
    fn walk(&self, out: &mut dyn Write) -> io::Result<()>;
    fn swim(&self, out: &mut dyn Write) -> io::Result<()>;
    fn talk(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl Duck for DonaldDuck {
    fn walk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Donald Duck walking...")
    }

    fn swim(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Donald Duck swimming...")
    }

    fn talk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I'm Donald Duck.")?;
        writeln!(out, "I'm {}", self.proto.age)?;
        writeln!(out, "My friends: [{}]", self.proto.friends.iter().join(" "))?;
        writeln!(out, "My family: [{}]", self.family.iter().join(" "))
    }
}

impl Duck for DaffyDuck {
    fn walk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Daffy Duck walking...")
    }

    fn swim(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Daffy Duck swimming...")
    }

    fn talk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I'm Daffy Duck.")?;
        writeln!(out, "I'm {}", self.proto.age)?;
        writeln!(out, "My species: {}", self.species)?;
        writeln!(out, "My friends: [{}]", self.proto.friends.iter().join(" "))
    }
}

fn perform(duck: &dyn Duck, out: &mut dyn Write) -> io::Result<()> {
    duck.walk(out)?;
    duck.swim(out)?;
    duck.talk(out)
}

/// Both concrete ducks through the same trait-object call sites.
pub fn duck_type(out: &mut dyn Write) -> io::Result<()> {
    let donald = DonaldDuck {
        proto: DuckProto {
            age: 83,
            friends: vec!["Mickey", "Minnie", "Goofy"],
        },
        family: vec!["McDuck", "Huey", "Dewey", "Louie"],
    };

    let daffy = DaffyDuck {
        proto: DuckProto {
            age: 80,
            friends: vec!["Bunny", "Porky"],
        },
        species: "American black duck",
    };

    perform(&donald, out)?;
    writeln!(out, "---")?;
    perform(&daffy, out)
}
