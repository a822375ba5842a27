/// Commands accepted by the platform runtime loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCommand {
    /// Resume clipboard polling
    StartClipboardWatcher,
    /// Pause clipboard polling
    StopClipboardWatcher,
    /// Leave the runtime loop
    Shutdown,
}
