//! Attribute-representation payloads
//!
//! Each payload constructs 100 000 small "pet" objects and formats every
//! one, comparing a named-field struct against looser representations:
//! a tuple struct, a `HashMap` attribute bag, and a `BTreeMap` attribute
//! bag.

use crate::registry::{BenchPair, Suite};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hint::black_box;

const OBJECTS: usize = 100_000;

struct Pet {
    legs: u32,
    noise: &'static str,
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Pet legs={} noise='{}'>", self.legs, self.noise)
    }
}

struct PetTuple(u32, &'static str);

impl fmt::Display for PetTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Pet legs={} noise='{}'>", self.0, self.1)
    }
}

enum Attr {
    Int(u32),
    Str(&'static str),
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Int(v) => write!(f, "{v}"),
            Attr::Str(v) => write!(f, "{v}"),
        }
    }
}

fn named_struct() {
    for _ in 0..OBJECTS {
        let dog = Pet {
            legs: 4,
            noise: "woof",
        };
        black_box(dog.to_string());
    }
}

fn tuple_struct() {
    for _ in 0..OBJECTS {
        let dog = PetTuple(4, "woof");
        black_box(dog.to_string());
    }
}

fn hashmap_bag() {
    for _ in 0..OBJECTS {
        let mut dog: HashMap<&str, Attr> = HashMap::new();
        dog.insert("legs", Attr::Int(4));
        dog.insert("noise", Attr::Str("woof"));
        black_box(format!(
            "<Pet legs={} noise='{}'>",
            dog["legs"], dog["noise"]
        ));
    }
}

fn btreemap_bag() {
    for _ in 0..OBJECTS {
        let mut dog: BTreeMap<&str, Attr> = BTreeMap::new();
        dog.insert("legs", Attr::Int(4));
        dog.insert("noise", Attr::Str("woof"));
        black_box(format!(
            "<Pet legs={} noise='{}'>",
            dog["legs"], dog["noise"]
        ));
    }
}

/// Attribute-representation suite
pub fn suite() -> Suite {
    Suite {
        name: "attributes",
        description: "object attribute representations",
        benches: vec![
            BenchPair::new(named_struct, tuple_struct, "named struct vs tuple struct"),
            BenchPair::new(named_struct, hashmap_bag, "named struct vs HashMap bag"),
            BenchPair::new(named_struct, btreemap_bag, "named struct vs BTreeMap bag"),
        ],
    }
}
