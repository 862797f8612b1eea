//! Drive/partition compaction
//!
//! A drive that carries partitions is not itself mounted, so once any of its
//! partitions is listed the bare drive entry is dropped.

use crate::device::name::DeviceName;
use std::collections::HashSet;

/// Remove every drive entry superseded by one of its partitions
///
/// Relative order of the remaining entries is preserved. Running this on its
/// own output changes nothing.
pub fn compact(mut devices: Vec<DeviceName>) -> Vec<DeviceName> {
    let mut removed: HashSet<String> = HashSet::new();

    // Walk newest to oldest; removals only ever shift entries we've already seen
    let mut index = devices.len();
    while index > 0 {
        index -= 1;

        if !devices[index].is_partition() {
            continue;
        }

        let drive = devices[index].drive().to_string();
        if removed.contains(&drive) {
            continue;
        }

        match devices
            .iter()
            .position(|d| !d.is_partition() && d.as_str() == drive)
        {
            Some(position) => {
                log::debug!("{} has partitions, dropping drive entry", drive);
                devices.remove(position);
                if position < index {
                    index -= 1;
                }
                removed.insert(drive);
            }
            None => {
                log::debug!(
                    "Partition {} has no drive entry {}, nothing to drop",
                    devices[index],
                    drive
                );
                removed.insert(drive);
            }
        }
    }

    devices
}
