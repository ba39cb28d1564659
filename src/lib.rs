pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{clock::SystemClock, soda::SodaSource, terminal::StdinPrompt};
pub use crate::config::CliConfig;
pub use crate::core::{finder::FinderEngine, presenter::PaginatedPresenter};
pub use crate::domain::model::{CurrentMoment, MinuteOfDay, PageReply, PermitRecord};
pub use crate::domain::ports::{Clock, ConfigProvider, PermitSource, Prompt};
pub use crate::utils::error::{FinderError, Result};
