use std::fmt;

/// Generations per second of the running simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRate {
    Limited(u32),
    /// Step on every rendered frame
    Unlimited,
}

impl FrameRate {
    /// Change applied by one press of the speed keys
    pub const STEP: u32 = 2;
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 240;

    pub fn new(fps: u32) -> Self {
        FrameRate::Limited(fps.clamp(Self::MIN, Self::MAX))
    }

    /// Seconds between generations, `None` when unlimited.
    /// Limited rates outside `MIN..=MAX` are clamped.
    pub fn interval(self) -> Option<f32> {
        match self {
            FrameRate::Limited(fps) => Some(1.0 / fps.clamp(Self::MIN, Self::MAX) as f32),
            FrameRate::Unlimited => None,
        }
    }

    pub fn slower(self) -> Self {
        match self {
            FrameRate::Limited(fps) => Self::new(fps.saturating_sub(Self::STEP)),
            FrameRate::Unlimited => FrameRate::Limited(Self::MAX),
        }
    }

    pub fn faster(self) -> Self {
        match self {
            FrameRate::Limited(fps) => Self::new(fps + Self::STEP),
            FrameRate::Unlimited => FrameRate::Unlimited,
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate::Limited(20)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRate::Limited(fps) => write!(f, "{fps} gen/s"),
            FrameRate::Unlimited => f.write_str("unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_steps() {
        let rate = FrameRate::default();
        assert_eq!(rate.faster(), FrameRate::Limited(22));
        assert_eq!(rate.slower(), FrameRate::Limited(18));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(FrameRate::new(0), FrameRate::Limited(1));
        assert_eq!(FrameRate::Limited(2).slower(), FrameRate::Limited(1));
        assert_eq!(FrameRate::Limited(1).slower(), FrameRate::Limited(1));
        assert_eq!(FrameRate::Limited(240).faster(), FrameRate::Limited(240));
    }

    #[test]
    fn test_unlimited() {
        assert_eq!(FrameRate::Unlimited.interval(), None);
        assert_eq!(FrameRate::Unlimited.faster(), FrameRate::Unlimited);
        assert_eq!(FrameRate::Unlimited.slower(), FrameRate::Limited(240));
        assert_eq!(FrameRate::Unlimited.to_string(), "unlimited");
    }

    #[test]
    fn test_interval() {
        assert_eq!(FrameRate::Limited(4).interval(), Some(0.25));
    }

    #[test]
    fn test_interval_of_unclamped_rate() {
        assert_eq!(FrameRate::Limited(0).interval(), Some(1.0));
        assert_eq!(FrameRate::Limited(1000).interval(), FrameRate::new(1000).interval());
    }
}
