//! Service layer
//!
//! Services wrap outbound side effects behind traits so the poller can
//! be tested with fakes.

mod notifier;

pub use notifier::{Notifier, NotifyError, TelegramNotifier};
