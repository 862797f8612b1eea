//! Size reporting and output formatting

use crate::device::{DeviceDiscovery, DeviceName, SizeProbe};
use crate::error::Result;
use bytesize::ByteSize;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Bytes per binary gigabyte
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A drive or partition ready to be offered for mounting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountableEntry {
    /// Device name (e.g., sdb1)
    pub name: DeviceName,
    /// Device node path (e.g., /dev/sdb1)
    pub path: PathBuf,
    /// Size in bytes
    pub bytes: u64,
    /// Size in binary gigabytes
    pub gigabytes: f64,
}

impl MountableEntry {
    /// Create an entry, deriving the size in gigabytes
    pub fn new(name: DeviceName, path: PathBuf, bytes: u64) -> Self {
        Self {
            name,
            path,
            bytes,
            gigabytes: bytes as f64 / GIB,
        }
    }

    /// Menu line, e.g. `sdb1  (14.91GB)`
    pub fn to_line(&self) -> String {
        format!("{:<5} ({:.2}GB)", self.name, self.gigabytes)
    }
}

/// Measures devices found by a discovery
pub struct SizeReporter<'a, P: SizeProbe> {
    discovery: &'a DeviceDiscovery,
    probe: &'a P,
}

impl<'a, P: SizeProbe> SizeReporter<'a, P> {
    /// Create a reporter resolving names against `discovery`
    pub fn new(discovery: &'a DeviceDiscovery, probe: &'a P) -> Self {
        Self { discovery, probe }
    }

    /// Query the size of one device
    pub fn measure(&self, name: &DeviceName) -> Result<MountableEntry> {
        let path = self.discovery.device_path(name);
        let bytes = self.probe.size_of(&path)?;
        log::debug!("{}: {} bytes ({})", path.display(), bytes, ByteSize(bytes));
        Ok(MountableEntry::new(name.clone(), path, bytes))
    }
}

/// Write one text line for `entry`
pub fn write_line<W: Write>(out: &mut W, entry: &MountableEntry) -> Result<()> {
    writeln!(out, "{}", entry.to_line())?;
    Ok(())
}

/// Write all entries as a JSON array
pub fn write_json<W: Write>(out: &mut W, entries: &[MountableEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
