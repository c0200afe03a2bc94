use super::{Automaton, FrameRate};
use crate::domain::{all_rules, CellCoord, RuleSet, Topology};

/// Session wraps an automaton with everything the window loop needs:
/// pause state, pacing, and the cells to draw this frame.
pub struct Session {
    pub automaton: Automaton,
    pub is_running: bool,
    pub frame_rate: FrameRate,
    pub update_timer: f32,
    pub pixel_size: f32,
    pub last_step_time_ms: f32,
    /// Live cells of the displayed generation
    pub live_cells: Vec<CellCoord>,
    /// Position in [`all_rules`] of the active rule, `None` for a custom rule
    rule_index: Option<usize>,
}

impl Session {
    pub fn new(automaton: Automaton, frame_rate: FrameRate, pixel_size: f32) -> Self {
        let live_cells = automaton.current().live_cells();
        let rule_index = preset_index(automaton.rules());
        Self {
            automaton,
            is_running: true,
            frame_rate,
            update_timer: 0.0,
            pixel_size,
            last_step_time_ms: 0.0,
            live_cells,
            rule_index,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    pub fn slower(mut self) -> Self {
        self.frame_rate = self.frame_rate.slower();
        self
    }

    pub fn faster(mut self) -> Self {
        self.frame_rate = self.frame_rate.faster();
        self
    }

    pub fn unlimited(mut self) -> Self {
        self.frame_rate = FrameRate::Unlimited;
        self
    }

    pub fn clear(mut self) -> Self {
        self.automaton.clear();
        self.refresh()
    }

    pub fn reset(mut self) -> Self {
        self.automaton.reset_to_seed();
        self.refresh()
    }

    pub fn fill_rectangle(mut self) -> Self {
        self.automaton.fill_rectangle();
        self.refresh()
    }

    /// Keep the birth/survival sets, switch neighborhood
    pub fn with_topology(mut self, topology: Topology) -> Self {
        let rules = self.automaton.rules().with_topology(topology);
        self.automaton.reconfigure(rules);
        self
    }

    /// Cycle through the named rules, keeping the current neighborhood
    pub fn next_rule(mut self) -> Self {
        let rules = all_rules();
        let index = self.rule_index.map_or(0, |i| (i + 1) % rules.len());
        self.rule_index = Some(index);
        let (name, rule) = rules[index];
        let topology = self.automaton.rules().topology();
        log::info!("switching to {name}");
        self.automaton.reconfigure(rule.with_topology(topology));
        self
    }

    /// Paint the cell under a window position. Positions off the grid or on
    /// its border are ignored.
    pub fn paint_at(&mut self, screen_x: f32, screen_y: f32) {
        if screen_x < 0.0 || screen_y < 0.0 {
            return;
        }
        let x = (screen_x / self.pixel_size) as usize;
        let y = (screen_y / self.pixel_size) as usize;
        if self.automaton.paint(x, y) {
            self.live_cells.push((x, y));
        }
    }

    /// Redraw list after the grid was replaced wholesale
    fn refresh(mut self) -> Self {
        self.live_cells = self.automaton.current().live_cells();
        self
    }

    /// Advance the simulation by one frame.
    /// Returns true if a generation was computed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += delta_time;
        if let Some(interval) = self.frame_rate.interval() {
            if self.update_timer < interval {
                return false;
            }
        }

        let start = std::time::Instant::now();
        self.live_cells = self.automaton.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.update_timer = 0.0;
        true
    }
}

/// Where `rules` sits among the named rules, whatever its topology
fn preset_index(rules: &RuleSet) -> Option<usize> {
    all_rules()
        .iter()
        .position(|(_, preset)| preset.with_topology(rules.topology()) == *rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AutomatonConfig;
    use crate::domain::{FillMode, SeedPolicy};

    fn session(fps: u32) -> Session {
        let config = AutomatonConfig::new(20, 10)
            .with_seed_policy(SeedPolicy::new(FillMode::Rectangle, 0).unwrap())
            .with_rng_seed(1);
        Session::new(Automaton::new(config).unwrap(), FrameRate::Limited(fps), 20.0)
    }

    #[test]
    fn test_starts_running_with_seed_drawn() {
        let session = session(20);
        assert!(session.is_running);
        assert_eq!(session.live_cells.len(), 18 * 8);
    }

    #[test]
    fn test_tick_respects_frame_rate() {
        let mut session = session(10);

        assert!(!session.tick(0.05));
        assert!(session.tick(0.05));
        assert_eq!(session.automaton.generation(), 1);
        assert_eq!(session.update_timer, 0.0);
    }

    #[test]
    fn test_paused_does_not_step() {
        let mut session = session(10).toggle_running();
        assert!(!session.tick(1.0));
        assert_eq!(session.automaton.generation(), 0);
    }

    #[test]
    fn test_unlimited_steps_every_frame() {
        let mut session = session(10).unlimited();
        assert!(session.tick(0.0));
        assert!(session.tick(0.0));
        assert_eq!(session.automaton.generation(), 2);
    }

    #[test]
    fn test_paint_at_maps_pixels_to_cells() {
        let mut session = session(10).clear();
        assert!(session.live_cells.is_empty());

        session.paint_at(45.0, 61.0);
        assert_eq!(session.live_cells, vec![(2, 3)]);

        // Border, off-grid and negative positions are ignored
        session.paint_at(5.0, 61.0);
        session.paint_at(4000.0, 61.0);
        session.paint_at(-3.0, 61.0);
        assert_eq!(session.live_cells.len(), 1);
        assert_eq!(session.automaton.current().count_alive(), 1);
    }

    #[test]
    fn test_dragging_over_a_live_cell_draws_it_once() {
        let mut session = session(10).clear().toggle_running();

        for _ in 0..60 {
            session.paint_at(45.0, 61.0);
        }
        assert_eq!(session.live_cells, vec![(2, 3)]);
        assert_eq!(session.automaton.current().count_alive(), 1);
    }

    #[test]
    fn test_topology_keeps_counts() {
        let session = session(10).with_topology(Topology::Diagonal);
        let rules = session.automaton.rules();
        assert_eq!(rules.topology(), Topology::Diagonal);
        assert_eq!(rules.to_string(), "B3/S23");
    }

    #[test]
    fn test_next_rule_cycles() {
        let session = session(10).with_topology(Topology::Cross).next_rule();
        assert_eq!(session.automaton.rules().to_string(), "B36/S23");
        assert_eq!(session.automaton.rules().topology(), Topology::Cross);

        let session = session.next_rule().next_rule().next_rule();
        assert_eq!(session.automaton.rules().to_string(), "B3/S23");
    }

    #[test]
    fn test_next_rule_starts_from_configured_rule() {
        let start = |rules: RuleSet| {
            let config = AutomatonConfig::new(20, 10).with_rules(rules).with_rng_seed(1);
            Session::new(Automaton::new(config).unwrap(), FrameRate::default(), 20.0)
        };

        let session = start(RuleSet::highlife().with_topology(Topology::Diagonal)).next_rule();
        assert_eq!(session.automaton.rules().to_string(), "B2/S");
        assert_eq!(session.automaton.rules().topology(), Topology::Diagonal);

        let custom = "B1/S1".parse().unwrap();
        let session = start(custom).next_rule();
        assert_eq!(*session.automaton.rules(), RuleSet::conway());
    }

    #[test]
    fn test_reset_and_fill_refresh_live_cells() {
        let session = session(10).clear();
        assert!(session.live_cells.is_empty());

        let session = session.fill_rectangle();
        assert_eq!(session.live_cells.len(), 18 * 8);

        let session = session.clear().reset();
        assert_eq!(session.live_cells, session.automaton.current().live_cells());
    }
}
