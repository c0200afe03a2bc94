use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which neighbors are counted around a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Topology {
    /// The 8 cells of the surrounding 3×3 block
    #[default]
    Moore,
    /// Up, down, left and right
    Cross,
    /// The 4 corner-touching cells
    Diagonal,
}

impl Topology {
    pub fn all() -> [Topology; 3] {
        [Topology::Moore, Topology::Cross, Topology::Diagonal]
    }

    /// Tag used in configuration
    pub const fn name(self) -> &'static str {
        match self {
            Topology::Moore => "moore",
            Topology::Cross => "cross",
            Topology::Diagonal => "diagonal",
        }
    }

    /// Largest neighbor count this topology can produce
    pub const fn max_count(self) -> u8 {
        match self {
            Topology::Moore => 8,
            Topology::Cross | Topology::Diagonal => 4,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = Error;

    /// Accepts the tags `moore`, `cross`, `diagonal` as well as the short
    /// selectors `8`, `4c` and `4d`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moore" | "8" => Ok(Topology::Moore),
            "cross" | "4c" => Ok(Topology::Cross),
            "diagonal" | "4d" => Ok(Topology::Diagonal),
            _ => Err(Error::UnknownTopology(s.to_owned())),
        }
    }
}

/// A set of neighbor counts in `0..=8`, stored as a bit mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct CountSet(u16);

impl CountSet {
    pub const EMPTY: CountSet = CountSet(0);

    /// Largest count any topology can produce
    pub const MAX: u8 = 8;

    /// Build a set, rejecting counts above 8
    pub fn new(counts: impl IntoIterator<Item = u8>) -> Result<Self> {
        counts.into_iter().try_fold(Self::EMPTY, |set, count| {
            if count > Self::MAX {
                Err(Error::CountOutOfRange(count.into()))
            } else {
                Ok(CountSet(set.0 | 1 << count))
            }
        })
    }

    #[inline]
    pub const fn contains(self, count: u8) -> bool {
        count <= Self::MAX && self.0 & (1 << count) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=Self::MAX).filter(move |&count| self.contains(count))
    }

    /// Largest count in the set
    pub fn max(self) -> Option<u8> {
        self.iter().last()
    }
}

impl fmt::Display for CountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|count| write!(f, "{count}"))
    }
}

impl FromStr for CountSet {
    type Err = Error;

    /// Parses `"23"`, `"2,3"` or `"2 3"`. An empty string is the empty set.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || Error::MalformedCountSet(s.to_owned());
        let values = if s.contains([',', ' ']) {
            s.split([',', ' '])
                .filter(|token| !token.is_empty())
                .map(|token| token.parse::<u32>().map_err(|_| malformed()))
                .collect::<Result<Vec<u32>>>()?
        } else {
            s.chars()
                .map(|c| c.to_digit(10).ok_or_else(malformed))
                .collect::<Result<Vec<u32>>>()?
        };

        let counts = values
            .into_iter()
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .filter(|&count| count <= Self::MAX)
                    .ok_or(Error::CountOutOfRange(value))
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::new(counts)
    }
}

/// Topology plus birth/survival sets.
///
/// A `RuleSet` can only be obtained through validated construction, so an
/// automaton always holds a usable rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    topology: Topology,
    birth: CountSet,
    survival: CountSet,
}

impl RuleSet {
    /// Counts above the topology's maximum are kept; they simply never match.
    pub fn new(topology: Topology, birth: CountSet, survival: CountSet) -> Self {
        for (label, set) in [("birth", birth), ("survival", survival)] {
            if let Some(max) = set.max().filter(|&max| max > topology.max_count()) {
                log::warn!(
                    "{label} count {max} can never be reached with the {topology} neighborhood"
                );
            }
        }
        Self { topology, birth, survival }
    }

    /// Parse raw configuration values; nothing is built unless all three parse
    pub fn parse(topology: &str, birth: &str, survival: &str) -> Result<Self> {
        Ok(Self::new(topology.parse()?, birth.parse()?, survival.parse()?))
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    pub const fn birth(&self) -> CountSet {
        self.birth
    }

    pub const fn survival(&self) -> CountSet {
        self.survival
    }

    /// Same birth/survival sets under another neighborhood
    pub fn with_topology(self, topology: Topology) -> Self {
        Self::new(topology, self.birth, self.survival)
    }

    /// Next state of a cell with `neighbors` live neighbors
    #[inline]
    pub const fn is_alive_next(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survival.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::preset(&[3], &[2, 3])
    }

    /// HighLife (B36/S23), known for its replicator
    pub fn highlife() -> Self {
        Self::preset(&[3, 6], &[2, 3])
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub fn seeds() -> Self {
        Self::preset(&[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub fn day_and_night() -> Self {
        Self::preset(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    fn preset(birth: &[u8], survival: &[u8]) -> Self {
        let mask = |counts: &[u8]| CountSet(counts.iter().fold(0, |mask, &c| mask | 1 << c));
        Self {
            topology: Topology::Moore,
            birth: mask(birth),
            survival: mask(survival),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    /// Parses `B3/S23` notation (case-insensitive) under the Moore topology.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedRule(s.to_owned());
        let upper = s.trim().to_ascii_uppercase();
        let (birth, survival) = upper.split_once('/').ok_or_else(malformed)?;
        let birth = birth.strip_prefix('B').ok_or_else(malformed)?;
        let survival = survival.strip_prefix('S').ok_or_else(malformed)?;

        Ok(Self::new(Topology::Moore, birth.parse()?, survival.parse()?))
    }
}

/// Get all named rules
pub fn all_rules() -> Vec<(&'static str, RuleSet)> {
    vec![
        ("Conway", RuleSet::conway()),
        ("HighLife", RuleSet::highlife()),
        ("Seeds", RuleSet::seeds()),
        ("Day&Night", RuleSet::day_and_night()),
    ]
}
