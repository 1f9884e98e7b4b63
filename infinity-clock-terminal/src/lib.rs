mod local_time;
mod strip;

pub use local_time::LocalTime;
pub use strip::TerminalStrip;
