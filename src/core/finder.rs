use crate::core::open_now::{open_now, sort_by_applicant};
use crate::core::presenter::PaginatedPresenter;
use crate::domain::ports::{Clock, PermitSource, Prompt};
use crate::utils::error::Result;
use std::io::Write;

/// Sequences one run: resolve the current moment, fetch the day's schedule,
/// keep what is open now, sort, and hand the list to the presenter.
pub struct FinderEngine<S: PermitSource, C: Clock> {
    source: S,
    clock: C,
    presenter: PaginatedPresenter,
}

impl<S: PermitSource, C: Clock> FinderEngine<S, C> {
    pub fn new(source: S, clock: C, presenter: PaginatedPresenter) -> Self {
        Self {
            source,
            clock,
            presenter,
        }
    }

    pub async fn run<W: Write, P: Prompt>(&self, out: &mut W, prompt: &mut P) -> Result<()> {
        let moment = self.clock.now();
        tracing::debug!(
            day = moment.day_of_week,
            clock = %moment.minute,
            "resolved current Pacific moment"
        );

        // A failed fetch degrades to the empty-result path; the presenter
        // turns that into the no-results message.
        let records = match self.source.fetch(moment.day_of_week).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Fetch failed: {}", e);
                Vec::new()
            }
        };
        tracing::info!("Fetched {} permit records", records.len());

        let mut open = open_now(&records, moment);
        sort_by_applicant(&mut open);
        tracing::info!("{} vendors open now", open.len());

        self.presenter.present(&open, out, prompt)
    }
}
