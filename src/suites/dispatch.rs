//! Dispatch payloads
//!
//! The runtime-constructed-class variant of the original workload maps to
//! indirection in Rust: constructing each object behind a boxed trait
//! object versus inline on the stack. The formatted output is identical in
//! both cases.

use crate::registry::{BenchPair, Suite};
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

fn inline_struct() {
    for _ in 0..OBJECTS {
        let dog = Pet {
            legs: 4,
            noise: "woof",
        };
        black_box(dog.to_string());
    }
}

fn boxed_trait_object() {
    for _ in 0..OBJECTS {
        let dog: Box<dyn fmt::Display> = Box::new(Pet {
            legs: 4,
            noise: "woof",
        });
        black_box(dog.to_string());
    }
}

/// Dispatch suite
pub fn suite() -> Suite {
    Suite {
        name: "dispatch",
        description: "inline construction vs boxed trait objects",
        benches: vec![BenchPair::new(
            inline_struct,
            boxed_trait_object,
            "inline struct vs boxed trait object",
        )],
    }
}
