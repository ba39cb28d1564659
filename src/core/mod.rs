pub mod finder;
pub mod open_now;
pub mod presenter;

pub use crate::domain::model::{CurrentMoment, MinuteOfDay, PageReply, PermitRecord};
pub use crate::domain::ports::{Clock, ConfigProvider, PermitSource, Prompt};
pub use crate::utils::error::Result;
