use tokio::sync::mpsc;

use crate::ipc::PlatformCommand;

pub const COMMAND_CHANNEL_CAPACITY: usize = 16;

pub type PlatformCommandSender = mpsc::Sender<PlatformCommand>;
pub type PlatformCommandReceiver = mpsc::Receiver<PlatformCommand>;

pub fn command_channel() -> (PlatformCommandSender, PlatformCommandReceiver) {
    mpsc::channel(COMMAND_CHANNEL_CAPACITY)
}
