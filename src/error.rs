//! Error types for lsmountable
//!
//! Every failure the pipeline can hit maps to one stable process exit code,
//! so scripts driving a picker can tell the failure kinds apart.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lsmountable operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code when the device directory cannot be listed
pub const EXIT_DIRECTORY: i32 = 1;
/// Exit code when no candidate devices were found
pub const EXIT_NO_DEVICES: i32 = 2;
/// Exit code when a device node cannot be opened
pub const EXIT_DEVICE_OPEN: i32 = 3;
/// Exit code when the size query on a device fails
pub const EXIT_SIZE_QUERY: i32 = 4;
/// Exit code for bad arguments or configuration (sysexits `EX_USAGE`)
pub const EXIT_USAGE: i32 = 64;
/// Exit code when writing the listing fails (sysexits `EX_IOERR`)
pub const EXIT_IO: i32 = 74;

/// Main error type
#[derive(Error, Debug)]
pub enum ListError {
    /// The device directory could not be opened or read
    #[error("Cannot list device directory {}: {source}", path.display())]
    DirectoryOpen {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No drive or partition passed classification
    #[error("No devices found in {}", .0.display())]
    NoDevices(PathBuf),

    /// A device node could not be opened read-only
    #[error("Cannot open device {}: {source}", path.display())]
    DeviceOpen {
        /// Device node path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The BLKGETSIZE64 ioctl failed
    #[error("Cannot get size of {}: {source}", path.display())]
    SizeQuery {
        /// Device node path
        path: PathBuf,
        /// Errno returned by the ioctl
        #[source]
        source: nix::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read or parsed
    #[error("Cannot load config file {}: {reason}", path.display())]
    ConfigFile {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// I/O error while writing the listing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryOpen { .. } => EXIT_DIRECTORY,
            Self::NoDevices(_) => EXIT_NO_DEVICES,
            Self::DeviceOpen { .. } => EXIT_DEVICE_OPEN,
            Self::SizeQuery { .. } => EXIT_SIZE_QUERY,
            Self::Config(_) | Self::ConfigFile { .. } => EXIT_USAGE,
            Self::Io(_) => EXIT_IO,
        }
    }

    /// Check if the error only concerns a single device
    ///
    /// Such errors may be skipped when reporting in hardened mode.
    pub fn is_per_device(&self) -> bool {
        matches!(self, Self::DeviceOpen { .. } | Self::SizeQuery { .. })
    }
}
