//! Device discovery by listing the device directory
//!
//! The directory is read exactly once; entries are classified by name only,
//! nothing is opened at this stage.

use crate::device::name::DeviceName;
use crate::error::{ListError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default device namespace root
pub const DEFAULT_DEV_ROOT: &str = "/dev";

/// Device discovery over a device directory
#[derive(Debug, Clone)]
pub struct DeviceDiscovery {
    root: PathBuf,
}

impl DeviceDiscovery {
    /// Create a discovery rooted at `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the device node for `name`
    pub fn device_path(&self, name: &DeviceName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// List candidate drives and partitions, sorted
    pub fn scan_devices(&self) -> Result<Vec<DeviceName>> {
        let entries = fs::read_dir(&self.root).map_err(|source| self.dir_error(source))?;

        let mut devices = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| self.dir_error(source))?;
            let file_name = entry.file_name();

            let Some(name) = file_name.to_str() else {
                log::trace!("Skipping non UTF-8 entry {:?}", file_name);
                continue;
            };

            match DeviceName::classify(name) {
                Some(device) => {
                    log::debug!("Candidate device: {}", device);
                    devices.push(device);
                }
                None => log::trace!("Ignoring {}", name),
            }
        }

        devices.sort();
        log::debug!(
            "Found {} candidate(s) in {}",
            devices.len(),
            self.root.display()
        );
        Ok(devices)
    }

    fn dir_error(&self, source: std::io::Error) -> ListError {
        ListError::DirectoryOpen {
            path: self.root.clone(),
            source,
        }
    }
}

impl Default for DeviceDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_DEV_ROOT)
    }
}
