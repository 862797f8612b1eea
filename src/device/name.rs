//! Device names and the entry classifier
//!
//! Only SCSI-style disk names are candidates: `sd` + a drive letter, with an
//! optional numeric partition suffix. The primary disk (`sda`) and all of its
//! partitions are never offered.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// Length of a bare drive name (`sdb`)
const DRIVE_NAME_LEN: usize = 3;

/// Names accepted as mountable candidates; `a` is the primary disk
fn candidate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^sd[b-z][0-9]*$").expect("valid device pattern"))
}

/// A drive or partition name that passed classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceName(String);

impl DeviceName {
    /// Classify a directory entry name
    ///
    /// Returns `None` for anything that is not a non-primary `sd` drive or
    /// partition.
    pub fn classify(name: &str) -> Option<Self> {
        if candidate_pattern().is_match(name) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the drive this entry belongs to (itself for a bare drive)
    pub fn drive(&self) -> &str {
        &self.0[..DRIVE_NAME_LEN]
    }

    /// Whether this names a partition rather than a whole drive
    pub fn is_partition(&self) -> bool {
        self.0.len() > DRIVE_NAME_LEN
    }

    /// Partition number, if this is a partition
    pub fn partition_number(&self) -> Option<u64> {
        if self.is_partition() {
            self.0[DRIVE_NAME_LEN..].parse().ok()
        } else {
            None
        }
    }
}

impl Ord for DeviceName {
    // sdb < sdb1 < sdb2 < sdb10 < sdc
    fn cmp(&self, other: &Self) -> Ordering {
        self.drive()
            .cmp(other.drive())
            .then_with(|| self.is_partition().cmp(&other.is_partition()))
            .then_with(|| self.0.len().cmp(&other.0.len()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DeviceName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags apply
        f.pad(&self.0)
    }
}

impl AsRef<str> for DeviceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for DeviceName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> DeviceName {
        DeviceName::classify(s).unwrap()
    }

    #[test]
    fn test_classify_accepts_drives_and_partitions() {
        for accepted in ["sdb", "sdz", "sdb1", "sdc12", "sdd0", "sdq123"] {
            assert!(
                DeviceName::classify(accepted).is_some(),
                "{} should be a candidate",
                accepted
            );
        }
    }

    #[test]
    fn test_classify_excludes_primary_disk() {
        assert!(DeviceName::classify("sda").is_none());
        assert!(DeviceName::classify("sda1").is_none());
        assert!(DeviceName::classify("sda15").is_none());
    }

    #[test]
    fn test_classify_rejects_other_names() {
        for rejected in [
            "", "s", "sd", "sdB", "sdb1x", "sdaa", "sdbb", "sr0", "nvme0n1", "nvme0n1p1", "vda",
            "vdb1", "tty", ".", "..", "mmcblk0", "xsdb", " sdb", "sdb ",
        ] {
            assert!(
                DeviceName::classify(rejected).is_none(),
                "{:?} should not be a candidate",
                rejected
            );
        }
    }

    #[test]
    fn test_drive_and_partition() {
        let drive = name("sdb");
        assert_eq!(drive.drive(), "sdb");
        assert!(!drive.is_partition());
        assert_eq!(drive.partition_number(), None);

        let part = name("sdb12");
        assert_eq!(part.drive(), "sdb");
        assert!(part.is_partition());
        assert_eq!(part.partition_number(), Some(12));
    }

    #[test]
    fn test_ordering_is_numeric_within_drive() {
        let mut names = vec![name("sdc"), name("sdb10"), name("sdb2"), name("sdb"), name("sdb1")];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(DeviceName::as_str).collect();
        assert_eq!(sorted, vec!["sdb", "sdb1", "sdb2", "sdb10", "sdc"]);
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:<5}|", name("sdb")), "sdb  |");
        assert_eq!(format!("{:<5}|", name("sdb123")), "sdb123|");
    }
}
