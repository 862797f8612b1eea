//! Block device size queries

use crate::error::{ListError, Result};
use std::fs::File;
use std::os::fd::AsRawFd;
use std::path::Path;

mod ioctl {
    nix::ioctl_read! {
        /// `BLKGETSIZE64`: device size in bytes
        blkgetsize64, 0x12, 114, u64
    }
}

/// Something that can tell how many bytes a device node holds
#[cfg_attr(test, mockall::automock)]
pub trait SizeProbe {
    /// Size of the device at `path`, in bytes
    fn size_of(&self, path: &Path) -> Result<u64>;
}

/// Queries the kernel with `BLKGETSIZE64`
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockSizeProbe;

impl SizeProbe for BlockSizeProbe {
    fn size_of(&self, path: &Path) -> Result<u64> {
        let file = File::open(path).map_err(|source| ListError::DeviceOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut bytes: u64 = 0;
        // SAFETY: the fd stays open for the duration of the call and `bytes`
        // is a valid u64 the kernel writes into.
        unsafe { ioctl::blkgetsize64(file.as_raw_fd(), &mut bytes) }.map_err(|source| {
            ListError::SizeQuery {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(bytes)
    }
}
