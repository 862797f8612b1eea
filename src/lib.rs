//! lsmountable Library
//!
//! Lists the drives and partitions that can be offered for mounting, with
//! their sizes, in a form suited to menu launchers such as dmenu:
//! - Non-primary `sd` drives and their partitions only (`sda*` is never listed)
//! - A drive with partitions is replaced by its partitions
//! - Sizes come from the `BLKGETSIZE64` ioctl, in binary gigabytes
//!
//! # Architecture
//!
//! - `config`: Configuration types and TOML loading
//! - `device`: Directory listing, name classification, compaction, size probe
//! - `report`: Entry type and text/JSON output
//! - `error`: Error types and exit codes
//!
//! # Example
//!
//! ```rust,no_run
//! use lsmountable::*;
//!
//! # fn main() -> Result<()> {
//! let mut config = Config::default();
//! config.skip_unreadable = true;
//!
//! let lister = Lister::new(config)?;
//! let stdout = std::io::stdout();
//! lister.run(&mut stdout.lock())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod device;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use device::{compact, BlockSizeProbe, DeviceDiscovery, DeviceName, SizeProbe};
pub use error::{ListError, Result};
pub use report::{MountableEntry, SizeReporter};

use std::io::Write;

/// Main pipeline: list, compact, report
pub struct Lister<P: SizeProbe = BlockSizeProbe> {
    config: Config,
    discovery: DeviceDiscovery,
    probe: P,
}

impl Lister<BlockSizeProbe> {
    /// Create a lister querying real block devices
    pub fn new(config: Config) -> Result<Self> {
        Self::with_probe(config, BlockSizeProbe)
    }
}

impl<P: SizeProbe> Lister<P> {
    /// Create a lister with a custom size probe
    pub fn with_probe(config: Config, probe: P) -> Result<Self> {
        config.validate()?;

        let discovery = DeviceDiscovery::new(config.dev_root.clone());
        Ok(Self {
            config,
            discovery,
            probe,
        })
    }

    /// Run the whole pipeline, writing the listing to `out`
    ///
    /// Returns the number of entries written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        log::debug!("Scanning {}", self.discovery.root().display());

        // Listing
        let candidates = self.discovery.scan_devices()?;
        if candidates.is_empty() {
            return Err(ListError::NoDevices(self.discovery.root().to_path_buf()));
        }

        // Compacting
        let devices = compact(candidates);
        log::debug!("{} mountable device(s) after compaction", devices.len());

        // Reporting
        match self.config.format {
            OutputFormat::Text => self.report_text(&devices, out),
            OutputFormat::Json => self.report_json(&devices, out),
        }
    }

    /// Stream one line per device as soon as it is measured
    fn report_text<W: Write>(&self, devices: &[DeviceName], out: &mut W) -> Result<usize> {
        let reporter = SizeReporter::new(&self.discovery, &self.probe);
        let mut written = 0;

        for device in devices {
            if let Some(entry) = self.measure(&reporter, device)? {
                report::write_line(out, &entry)?;
                written += 1;
            }
        }

        out.flush()?;
        Ok(written)
    }

    /// Measure everything first, then write a single JSON document
    fn report_json<W: Write>(&self, devices: &[DeviceName], out: &mut W) -> Result<usize> {
        let reporter = SizeReporter::new(&self.discovery, &self.probe);
        let mut entries = Vec::with_capacity(devices.len());

        for device in devices {
            if let Some(entry) = self.measure(&reporter, device)? {
                entries.push(entry);
            }
        }

        report::write_json(out, &entries)?;
        out.flush()?;
        Ok(entries.len())
    }

    /// Measure one device, honouring `skip_unreadable`
    fn measure(
        &self,
        reporter: &SizeReporter<'_, P>,
        device: &DeviceName,
    ) -> Result<Option<MountableEntry>> {
        match reporter.measure(device) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) if self.config.skip_unreadable && e.is_per_device() => {
                log::warn!("Skipping {}: {}", device, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
