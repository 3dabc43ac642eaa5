//! Trybuild fixture deriving `Flags` for every supported field shape.

use std::fmt;
use std::time::Duration;

use flagger::{FlagSet, FlagValue, Flags, ValueError};

struct Level(u8);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FlagValue for Level {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        self.0 = raw.parse()?;
        Ok(())
    }
}

#[derive(Flags)]
struct Everything {
    pub b: bool,
    pub i: i32,
    pub r#i64: i64,
    pub d: Duration,
    pub u: usize,
    pub u64: u64,
    pub f: f64,
    pub(crate) s: String,
    pub(in crate) level: Level,
    #[flag("-")]
    pub skipped: Vec<String>,
    private: Option<String>,
}

#[derive(Flags)]
struct Nothing;

fn main() {
    let mut everything = Everything {
        b: false,
        i: 0,
        i64: 0,
        d: Duration::ZERO,
        u: 0,
        u64: 0,
        f: 0.0,
        s: String::new(),
        level: Level(0),
        skipped: Vec::new(),
        private: None,
    };
    let mut nothing = Nothing;
    let mut nested = Some(Box::new(&mut nothing));
    let mut flags = FlagSet::new("fixture");
    let _ = flagger::bind(&mut flags, &mut everything);
    let _ = flagger::bind(&mut flags, &mut nested);
}
