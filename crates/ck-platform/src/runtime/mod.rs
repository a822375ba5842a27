pub mod event_bus;
pub mod poller;
pub mod runtime;

pub use event_bus::{command_channel, PlatformCommandReceiver, PlatformCommandSender};
pub use poller::ClipboardPoller;
pub use runtime::PlatformRuntime;
