use crate::domain::model::{CurrentMoment, PermitRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where permit records come from. Fetched once per run; the engine treats
/// a failed fetch as an empty schedule.
#[async_trait]
pub trait PermitSource: Send + Sync {
    /// `day_of_week` lets the source narrow the request server-side; local
    /// filtering remains authoritative.
    async fn fetch(&self, day_of_week: u8) -> Result<Vec<PermitRecord>>;
}

/// Pacific-normalized wall clock. Abstracted so tests can pin the moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> CurrentMoment;
}

/// Line-oriented source of replies to the pagination prompt.
pub trait Prompt {
    /// The next input line, or `None` once input is closed.
    fn read_reply(&mut self) -> Result<Option<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
}
