//! Device discovery, classification, compaction and size queries

pub mod compact;
pub mod discovery;
pub mod name;
pub mod size;

pub use compact::compact;
pub use discovery::{DeviceDiscovery, DEFAULT_DEV_ROOT};
pub use name::DeviceName;
pub use size::{BlockSizeProbe, SizeProbe};
