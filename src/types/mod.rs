mod device_info;
mod kinds;
mod results;

pub use device_info::DeviceInfo;
pub(crate) use device_info::{is_desktop, DeviceInfoBuilder, UaSignals};
pub use kinds::{ClientType, DeviceType, UnknownLabel};
pub use results::*;
