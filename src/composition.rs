//! Composition over inheritance: embedded values, and an outer method that
//! shadows the embedded type's version at the call site.

use std::io::{self, Write};
use std::ops::Deref;

struct Person {
    name: String,
    #[allow(dead_code)]
    age: i32,
}

/// A `Coder` is a `Person` with extra fields, expressed as plain composition:
/// the outer value owns the inner one, field access is a path.
struct Coder {
    person: Person,
    skills: Vec<String>,
}

/// Struct composition and one-off local struct types (standing in for
/// anonymous struct values).
pub fn structs(out: &mut dyn Write) -> io::Result<()> {
    let mut geek = Coder {
        person: Person {
            name: "rustacean".into(),
            age: 10,
        },
        skills: Vec::new(),
    };
    geek.skills.push("Rust".into());
    geek.skills.push("C".into());
    geek.skills.push("Python".into());

    writeln!(out, "I'm \"{}\"", geek.person.name)?;
    for skill in &geek.skills {
        writeln!(out, "---> I have skill: '{}'", skill)?;
    }

    // a one-off type, local to this demonstration
    struct Suspect {
        info: Coder,
        arrest: bool,
    }
    let hacker = Suspect {
        info: Coder {
            person: Person {
                name: "anonymous".into(),
                age: -1,
            },
            skills: vec!["unknown".into()],
        },
        arrest: false,
    };
    writeln!(out, "Hacker: \"{}\"", hacker.info.person.name)?;
    writeln!(out, "Arrest: {}", hacker.arrest)?;

    struct JobCard {
        company: &'static str,
        title: &'static str,
    }
    let data = JobCard {
        company: "anonymous group",
        title: "Hacker & Geek",
    };
    writeln!(out, "Work company: \"{}\"", data.company)?;
    writeln!(out, "Job title: \"{}\"", data.title)?;
    Ok(())
}

pub struct Geek {
    pub name: String,
    pub skills: Vec<String>,
}

impl Geek {
    pub fn learn_skill(&mut self, skill: &str) {
        self.skills.push(skill.to_string());
    }
}

/// Embeds a `Geek`. `Deref` exposes the inner fields and methods, while the
/// inherent `learn_skill` below shadows the geek's version for callers.
pub struct Hacker {
    geek: Geek,
    pub arrest: bool,
}

impl Hacker {
    pub fn new(geek: Geek, arrest: bool) -> Self {
        Hacker { geek, arrest }
    }

    /// Shadows `Geek::learn_skill`: an arrested hacker learns nothing.
    pub fn learn_skill(&mut self, skill: &str) {
        if self.arrest {
            return;
        }
        self.geek.learn_skill(skill);
    }
}

impl Deref for Hacker {
    type Target = Geek;

    fn deref(&self) -> &Geek {
        &self.geek
    }
}

/// Method dispatch through composition: the call sites are statically known,
/// so the outer inherent method wins wherever it shadows the inner one.
pub fn methods(out: &mut dyn Write) -> io::Result<()> {
    let mut geek = Geek {
        name: "RustGeek".into(),
        skills: vec!["C".into(), "C++".into()],
    };
    let mut hacker = Hacker::new(
        Geek {
            name: "RustHacker".into(),
            skills: vec!["C".into(), "Rust".into()],
        },
        false,
    );

    geek.learn_skill("Python");

    hacker.learn_skill("Javascript");
    hacker.arrest = true; // under arrest
    hacker.learn_skill("Python"); // refused by the shadowing method

    for skill in &geek.skills {
        writeln!(out, "Geek have skill: {}", skill)?;
    }
    // reads flow through Deref to the embedded value
    for skill in &hacker.skills {
        writeln!(out, "Hacker have skill: {}", skill)?;
    }
    Ok(())
}
