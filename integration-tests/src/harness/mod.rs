pub mod daemon;
pub mod tracing;

pub use self::daemon::FakeDaemon;
pub use self::tracing::{CapturedEvent, init_test_tracing};
