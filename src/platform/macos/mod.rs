use crate::model::platform::Platform;

pub const CURRENT_PLATFORM: Platform = Platform::MacOs;
