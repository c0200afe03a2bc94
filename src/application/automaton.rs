use crate::domain::{
    neighborhood, Algorithm, Cell, CellCoord, FillMode, GridBuffer, RuleSet, SeedGenerator, SeedPolicy,
};
use crate::error::Result;

/// Typed configuration for an [`Automaton`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatonConfig {
    pub width: usize,
    pub height: usize,
    pub rules: RuleSet,
    pub seed_policy: SeedPolicy,
    pub algorithm: Algorithm,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
}

impl AutomatonConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for AutomatonConfig {
    /// A 1400×700 window of 20 px cells
    fn default() -> Self {
        Self {
            width: 70,
            height: 35,
            rules: RuleSet::default(),
            seed_policy: SeedPolicy::default(),
            algorithm: Algorithm::default(),
            rng_seed: None,
        }
    }
}

/// Automaton owns the double-buffered grid and the active rule.
///
/// The current buffer is what callers see; the working buffer receives each
/// new generation and is then swapped in. The border of both buffers is
/// dead and never written, so it stays a frozen boundary.
pub struct Automaton {
    current: GridBuffer,
    working: GridBuffer,
    rules: RuleSet,
    seed_policy: SeedPolicy,
    seeder: SeedGenerator,
    algorithm: Algorithm,
    generation: u64,
}

impl Automaton {
    /// Build an automaton seeded from `config.seed_policy`
    pub fn new(config: AutomatonConfig) -> Result<Self> {
        let mut seeder = match config.rng_seed {
            Some(seed) => SeedGenerator::seeded(seed),
            None => SeedGenerator::from_entropy(),
        };
        let mut current = seeder.generate(config.width, config.height, config.seed_policy)?;
        current.clear_border();
        let working = current.dead_like();

        log::info!(
            "created {}x{} automaton: {} {} neighborhood, {} fill, {}% barrier",
            config.width,
            config.height,
            config.rules,
            config.rules.topology(),
            config.seed_policy.fill_mode(),
            config.seed_policy.barrier_percent(),
        );
        log::debug!("evolution: {} ({})", config.algorithm, config.algorithm.description());

        Ok(Self {
            current,
            working,
            rules: config.rules,
            seed_policy: config.seed_policy,
            seeder,
            algorithm: config.algorithm,
            generation: 0,
        })
    }

    /// Advance one generation.
    ///
    /// Returns the interior cells alive in the new generation, row-major,
    /// so a renderer can redraw only those.
    pub fn step(&mut self) -> Vec<CellCoord> {
        let live = neighborhood::step(&self.current, &mut self.working, &self.rules, self.algorithm);
        self.current.swap(&mut self.working);
        self.generation += 1;
        log::trace!("generation {}: {} live cells", self.generation, live.len());
        live
    }

    /// Bring an interior cell to life. Anything else is ignored.
    ///
    /// Returns true only when a dead cell became alive.
    pub fn paint(&mut self, x: usize, y: usize) -> bool {
        self.current.get(x, y) == Some(Cell::Dead)
            && self.current.set(x, y, Cell::Alive)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.current.clear();
        self.working.clear();
        self.generation = 0;
        log::debug!("grid cleared");
    }

    /// Reseed from the stored policy
    pub fn reset_to_seed(&mut self) {
        self.reseed(self.seed_policy);
    }

    /// Reseed with a solid rectangle, keeping the stored barrier
    pub fn fill_rectangle(&mut self) {
        self.reseed(self.seed_policy.with_fill_mode(FillMode::Rectangle));
    }

    fn reseed(&mut self, policy: SeedPolicy) {
        self.seeder.fill(&mut self.current, policy);
        self.current.clear_border();
        self.working.clear();
        self.generation = 0;
        log::debug!(
            "reseeded with {} fill, {} live cells",
            policy.fill_mode(),
            self.current.count_alive()
        );
    }

    /// Replace the active rule; takes effect on the next step
    pub fn reconfigure(&mut self, rules: RuleSet) {
        if rules != self.rules {
            log::info!(
                "rule {} {} -> {} {}",
                self.rules,
                self.rules.topology(),
                rules,
                rules.topology()
            );
        }
        self.rules = rules;
    }

    /// Parse and apply raw rule settings.
    ///
    /// On error the previous rule stays active.
    pub fn reconfigure_from(&mut self, topology: &str, birth: &str, survival: &str) -> Result<()> {
        match RuleSet::parse(topology, birth, survival) {
            Ok(rules) => {
                self.reconfigure(rules);
                Ok(())
            }
            Err(err) => {
                log::warn!("keeping rule {}: {err}", self.rules);
                Err(err)
            }
        }
    }

    pub fn current(&self) -> &GridBuffer {
        &self.current
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::debug!("evolution: {} ({})", algorithm, algorithm.description());
        self.algorithm = algorithm;
    }

    /// Generations since construction or the last clear/reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountSet, Topology};
    use crate::error::Error;

    fn automaton(width: usize, height: usize, fill_mode: FillMode, barrier: u32) -> Automaton {
        let config = AutomatonConfig::new(width, height)
            .with_seed_policy(SeedPolicy::new(fill_mode, barrier).unwrap())
            .with_rng_seed(2024);
        Automaton::new(config).unwrap()
    }

    fn empty(width: usize, height: usize) -> Automaton {
        let mut automaton = automaton(width, height, FillMode::Random, 0);
        automaton.clear();
        automaton
    }

    fn border_is_dead(grid: &GridBuffer) -> bool {
        grid.iter_cells()
            .filter(|&(x, y, _)| !grid.is_interior(x, y))
            .all(|(_, _, cell)| !cell.is_alive())
    }

    #[test]
    fn test_too_small_is_rejected() {
        let result = Automaton::new(AutomatonConfig::new(2, 40));
        assert!(matches!(result, Err(Error::GridTooSmall { width: 2, height: 40 })));
    }

    #[test]
    fn test_lonely_cell_extinction() {
        let mut automaton = empty(5, 5);
        assert!(automaton.paint(2, 2));

        let live = automaton.step();

        assert!(live.is_empty());
        assert_eq!(automaton.current().count_alive(), 0);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut automaton = empty(12, 12);
        for x in 4..=6 {
            automaton.paint(x, 5);
        }
        let horizontal = automaton.current().clone();

        let live = automaton.step();
        assert_eq!(live, vec![(5, 4), (5, 5), (5, 6)]);
        assert_eq!(automaton.current().count_alive(), 3);

        let live = automaton.step();
        assert_eq!(live, vec![(4, 5), (5, 5), (6, 5)]);
        assert_eq!(automaton.current(), &horizontal);
        assert_eq!(automaton.generation(), 2);
    }

    #[test]
    fn test_rectangle_seed() {
        let mut automaton = automaton(10, 10, FillMode::Random, 0);
        automaton.fill_rectangle();

        let grid = automaton.current();
        for (x, y, cell) in grid.iter_cells() {
            assert_eq!(cell.is_alive(), grid.is_interior(x, y), "unexpected state at ({x}, {y})");
        }
        // Stored policy is untouched
        assert_eq!(automaton.seed_policy().fill_mode(), FillMode::Random);
    }

    #[test]
    fn test_rectangle_policy_at_construction() {
        let automaton = automaton(10, 10, FillMode::Rectangle, 0);
        assert_eq!(automaton.current().count_alive(), 8 * 8);
        assert!(border_is_dead(automaton.current()));
    }

    #[test]
    fn test_border_stays_dead() {
        let mut automaton = automaton(30, 20, FillMode::Random, 0);
        assert!(border_is_dead(automaton.current()));

        for _ in 0..25 {
            automaton.step();
            assert!(border_is_dead(automaton.current()));
        }

        automaton.fill_rectangle();
        for _ in 0..5 {
            automaton.step();
            assert!(border_is_dead(automaton.current()));
        }
    }

    #[test]
    fn test_paint_border_and_outside_is_noop() {
        let mut automaton = automaton(8, 6, FillMode::Random, 0);
        let before = automaton.current().clone();

        let targets = [(0, 0), (0, 3), (7, 3), (4, 0), (4, 5), (8, 2), (3, 6), (100, 100)];
        for (x, y) in targets {
            assert!(!automaton.paint(x, y), "({x}, {y}) should be ignored");
        }

        assert_eq!(automaton.current(), &before);
    }

    #[test]
    fn test_paint_reports_only_births() {
        let mut automaton = automaton(8, 6, FillMode::Random, 0);
        automaton.clear();

        assert!(automaton.paint(3, 2));
        assert!(!automaton.paint(3, 2));
        assert_eq!(automaton.current().count_alive(), 1);
    }

    #[test]
    fn test_empty_grid_fixed_point() {
        let mut automaton = automaton(20, 15, FillMode::Random, 0);
        automaton.clear();

        for _ in 0..10 {
            assert!(automaton.step().is_empty());
        }
        assert_eq!(automaton.current().count_alive(), 0);
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = automaton(25, 25, FillMode::Random, 10);
        let mut b = automaton(25, 25, FillMode::Random, 10);

        for _ in 0..10 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn test_reset_restarts_generation() {
        let mut automaton = automaton(16, 16, FillMode::Random, 0);
        automaton.step();
        automaton.step();
        assert_eq!(automaton.generation(), 2);

        automaton.reset_to_seed();
        assert_eq!(automaton.generation(), 0);
        assert!(border_is_dead(automaton.current()));
    }

    #[test]
    fn test_reconfigure_applies_on_next_step() {
        let mut automaton = empty(7, 7);
        automaton.paint(3, 3);

        // B1/S under cross: a dot grows into four orthogonal neighbors
        let rules = RuleSet::new(Topology::Cross, CountSet::new([1]).unwrap(), CountSet::EMPTY);
        automaton.reconfigure(rules);
        assert_eq!(automaton.current().count_alive(), 1);

        assert_eq!(automaton.step(), vec![(3, 2), (2, 3), (4, 3), (3, 4)]);
    }

    #[test]
    fn test_invalid_reconfigure_keeps_rule() {
        let mut automaton = empty(7, 7);
        let before = *automaton.rules();

        let err = automaton.reconfigure_from("hexagonal", "3", "23");
        assert_eq!(err, Err(Error::UnknownTopology("hexagonal".to_owned())));
        assert!(automaton.reconfigure_from("moore", "3a", "23").is_err());
        assert!(automaton.reconfigure_from("moore", "3", "29").is_err());
        assert_eq!(automaton.rules(), &before);

        assert!(automaton.reconfigure_from("4d", "1", "").is_ok());
        assert_eq!(automaton.rules().topology(), Topology::Diagonal);
    }

    #[test]
    fn test_algorithms_agree() {
        let mut serial = automaton(40, 30, FillMode::Random, 0);
        let mut parallel = automaton(40, 30, FillMode::Random, 0);
        serial.set_algorithm(Algorithm::Serial);
        parallel.set_algorithm(Algorithm::Parallel);
        assert_eq!(serial.algorithm(), Algorithm::Serial);
        assert_eq!(parallel.algorithm(), Algorithm::Parallel);

        for _ in 0..8 {
            assert_eq!(serial.step(), parallel.step());
        }
    }
}
