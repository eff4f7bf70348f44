//! Platform service traits and desktop implementation for TermySH.

mod services;

/// Desktop implementation of all platform services.
pub use services::DesktopPlatform;
/// Captured output of a finished child process.
pub use services::ExecCapture;
/// External-process execution service (plain and elevated shells).
pub use services::ProcessService;
/// A simple wall-clock timestamp.
pub use services::SystemTime;
/// Wall-clock time service.
pub use services::TimeService;
