use crate::domain::model::{PageReply, PermitRecord};
use crate::domain::ports::Prompt;
use crate::utils::error::Result;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

pub const DEFAULT_PAGE_SIZE: usize = 10;

const NO_RESULTS_MSG: &str = "Sorry, no open food trucks.";
const NO_MORE_MSG: &str = "No more results";
const PROMPT_MSG: &str = "Type \"Y/N\" for more results and press \"Enter\"";
const INVALID_MSG: &str =
    "Invalid input: Type \"Y\" for more results or \"N\" to exit. Then press \"Enter\"";

/// Pages a result list through the terminal, `page_size` rows at a time.
///
/// State lives in an explicit cursor and every page builds a fresh table,
/// so a render never carries rows over from the previous page. Output goes
/// to the injected writer and replies come from the injected [`Prompt`],
/// which is what makes the loop scriptable in tests.
pub struct PaginatedPresenter {
    page_size: usize,
}

impl PaginatedPresenter {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn present<W: Write, P: Prompt>(
        &self,
        records: &[PermitRecord],
        out: &mut W,
        prompt: &mut P,
    ) -> Result<()> {
        if records.is_empty() {
            writeln!(out, "{}", NO_RESULTS_MSG)?;
            return Ok(());
        }

        let mut cursor = 0;
        loop {
            cursor = self.render_page(records, cursor, out)?;
            if cursor >= records.len() {
                writeln!(out, "{}", NO_MORE_MSG)?;
                return Ok(());
            }

            // awaiting input: only a decisive reply moves the cursor
            loop {
                write!(out, "{}", PROMPT_MSG)?;
                out.flush()?;
                let Some(line) = prompt.read_reply()? else {
                    // input closed, same as an explicit "n"
                    writeln!(out)?;
                    return Ok(());
                };
                match PageReply::parse(&line) {
                    PageReply::More => break,
                    PageReply::Stop => return Ok(()),
                    PageReply::Invalid => writeln!(out, "\n{}", INVALID_MSG)?,
                }
            }
        }
    }

    /// Renders the rows in `[cursor, cursor + page_size)`, clamped to the
    /// list length; returns the advanced cursor.
    fn render_page<W: Write>(
        &self,
        records: &[PermitRecord],
        cursor: usize,
        out: &mut W,
    ) -> Result<usize> {
        let upper = records.len().min(cursor + self.page_size);

        let mut table = Table::new();
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Name", "Address"]);
        for record in &records[cursor..upper] {
            table.add_row(vec![record.applicant.as_str(), record.location.as_str()]);
        }
        writeln!(out, "{table}")?;

        Ok(upper)
    }
}

impl Default for PaginatedPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
