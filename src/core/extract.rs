use crate::domain::model::SubmissionRow;
use scraper::{Html, Selector};

/// Safety cap on how many rows one page walk may visit. The page itself
/// paginates well below this; the cap only guards against malformed or
/// adversarial markup.
pub const DEFAULT_ROW_CAP: usize = 100;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Pull ordered [`SubmissionRow`]s out of a status-page snapshot.
///
/// The table is `#status-table`; per row the problem id sits in the third
/// column (inside `a.problem_title` when the page renders a link) and the
/// submission instant in a `data-timestamp` attribute (epoch seconds) on the
/// ninth column's anchor.
///
/// A row without the timestamp attribute ends extraction rather than being
/// skipped: the page stops rendering the attribute for a whole suffix of the
/// table, so the first bare row means no further row carries usable data.
pub fn extract_rows(markup: &str, max_rows: usize) -> Vec<SubmissionRow> {
    let document = Html::parse_document(markup);
    let row_sel = selector("#status-table > tbody > tr");
    let cell_sel = selector("td");
    let title_sel = selector("a.problem_title");
    let stamp_sel = selector("a[data-timestamp]");

    let mut rows = Vec::new();
    for (idx, tr) in document.select(&row_sel).take(max_rows).enumerate() {
        let cells: Vec<_> = tr.select(&cell_sel).collect();

        let Some(problem_cell) = cells.get(2) else {
            break;
        };
        let problem_id = match problem_cell.select(&title_sel).next() {
            Some(anchor) => anchor.text().collect::<String>(),
            None => problem_cell.text().collect::<String>(),
        }
        .trim()
        .to_string();

        let stamp = cells
            .get(8)
            .and_then(|cell| cell.select(&stamp_sel).next())
            .and_then(|anchor| anchor.value().attr("data-timestamp"));
        let Some(stamp) = stamp else {
            tracing::debug!(rank = idx + 1, "row without timestamp, ending extraction");
            break;
        };
        let Ok(seconds) = stamp.parse::<i64>() else {
            tracing::warn!(rank = idx + 1, stamp, "unparsable timestamp, ending extraction");
            break;
        };

        rows.push(SubmissionRow {
            problem_id,
            timestamp_ms: seconds * 1000,
            rank: idx + 1,
        });
    }

    tracing::debug!(rows = rows.len(), "extracted status rows");
    rows
}
