use crate::Cell;
use anyhow::{Context, Result};

pub struct Pattern {
    pub name: &'static str,
    pub rle: &'static str,
}

impl Pattern {
    pub fn cells(&self) -> Result<Vec<Cell>> {
        crate::parse_rle(self.rle.as_bytes())
            .with_context(|| format!("built-in pattern {:?}", self.name))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rle: "x = 3, y = 3, rule = B3/S23\nbob$2bo$3o!",
    },
    Pattern {
        name: "Block",
        rle: "x = 2, y = 2, rule = B3/S23\n2o$2o!",
    },
    Pattern {
        name: "Blinker",
        rle: "x = 3, y = 1, rule = B3/S23\n3o!",
    },
    Pattern {
        name: "Toad",
        rle: "x = 4, y = 2, rule = B3/S23\nb3o$3o!",
    },
    Pattern {
        name: "Beacon",
        rle: "x = 4, y = 4, rule = B3/S23\n2o$2o$2b2o$2b2o!",
    },
    Pattern {
        name: "Pulsar",
        rle: "x = 13, y = 13, rule = B3/S23\n\
              2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$\n\
              2b3o3b3o2b$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
    },
    Pattern {
        name: "R-pentomino",
        rle: "x = 3, y = 3, rule = B3/S23\nb2o$2o$bo!",
    },
    Pattern {
        name: "Lightweight spaceship",
        rle: "x = 5, y = 4, rule = B3/S23\nbo2bo$o4b$o3bo$4o!",
    },
    Pattern {
        name: "Gosper glider gun",
        rle: "x = 36, y = 9, rule = B3/S23\n\
              24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\n\
              2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    },
];

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_parse() {
        let expected_population = [5, 4, 3, 6, 8, 48, 5, 9, 36];
        assert_eq!(PATTERNS.len(), expected_population.len());
        for (pattern, population) in PATTERNS.iter().zip(expected_population) {
            let cells = pattern.cells().unwrap();
            assert_eq!(cells.len(), population, "{}", pattern.name);
        }
    }

    #[test]
    fn test_find_pattern() {
        assert_eq!(find_pattern("glider").map(|p| p.name), Some("Glider"));
        assert!(find_pattern("unknown").is_none());
    }
}
