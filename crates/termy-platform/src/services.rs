//! Platform service traits and desktop implementation.

use std::process::Command;

use termy_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp.
#[derive(Debug, Clone, Copy)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

// ---------------------------------------------------------------------------
// Process service
// ---------------------------------------------------------------------------

/// Captured output of a finished child process.
#[derive(Debug, Clone)]
pub struct ExecCapture {
    /// Standard-output lines, in order.
    pub stdout: Vec<String>,
    /// Standard-error lines, in order.
    pub stderr: Vec<String>,
    /// Exit status code (-1 when terminated by a signal).
    pub status: i32,
}

impl ExecCapture {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Abstraction over external-process execution.
///
/// Execution is synchronous and blocking with no timeout: a hung child
/// blocks the caller until it exits or the host process dies.
pub trait ProcessService {
    /// Run `sh -c <command_line>` to completion, capturing both streams.
    fn run_shell(&self, command_line: &str) -> Result<ExecCapture>;

    /// Run `su -c <command_line>` to completion, capturing both streams.
    fn run_elevated(&self, command_line: &str) -> Result<ExecCapture>;

    /// Whether elevated execution is available. Probes `su -c "echo root"`;
    /// true iff the probe exits with status 0, false on any spawn failure.
    fn elevation_available(&self) -> bool {
        match self.run_elevated("echo root") {
            Ok(capture) => capture.success(),
            Err(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using `std` facilities.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        // UTC breakdown; no timezone handling.
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;
        let (year, month, day) = days_to_ymd(days);

        Ok(SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

impl ProcessService for DesktopPlatform {
    fn run_shell(&self, command_line: &str) -> Result<ExecCapture> {
        run_via("sh", command_line)
    }

    fn run_elevated(&self, command_line: &str) -> Result<ExecCapture> {
        run_via("su", command_line)
    }
}

/// Spawn `<interpreter> -c <command_line>`, wait, and capture both streams.
fn run_via(interpreter: &str, command_line: &str) -> Result<ExecCapture> {
    log::debug!("spawning: {interpreter} -c {command_line}");
    let output = Command::new(interpreter)
        .arg("-c")
        .arg(command_line)
        .output()?;
    Ok(ExecCapture {
        stdout: split_lines(&output.stdout),
        stderr: split_lines(&output.stderr),
        status: output.status.code().unwrap_or(-1),
    })
}

/// Split a captured stream into lines, tolerating non-UTF-8 bytes.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since the Unix epoch to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
