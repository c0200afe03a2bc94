mod automaton;
mod frame_rate;
mod session;

pub use automaton::{Automaton, AutomatonConfig};
pub use frame_rate::FrameRate;
pub use session::Session;
