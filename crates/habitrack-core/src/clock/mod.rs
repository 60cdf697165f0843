mod app_clock;
mod source;

pub use app_clock::AppClock;
pub use source::{Clock, FixedClock, SystemClock};
