//! Generic cursor-pagination aggregator.
//!
//! TT limits paginated responses to around 500 records per page. Each page
//! carries a `lastPage` flag (the string `"true"` or `"false"`) and, when more
//! data is available, an opaque `nextPageKey` cursor to echo back on the next
//! call. [`fetch_all_pages`] walks that chain sequentially and merges the
//! per-page result arrays into one response.

use std::future::Future;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Repeatedly invoke a single-page request across cursor pages and concatenate
/// the results.
///
/// `fetch` is the bound single-page operation: it is called with `None` for
/// the first page and with `Some(cursor)` for every page after that, where the
/// cursor is the `nextPageKey` value of the previous page, passed back
/// verbatim. Any fixed arguments belong in the closure. `results_key` names
/// the field holding each page's result array; it must be the same on every
/// page.
///
/// The returned value has the shape of the last page fetched, with
/// `results_key` replaced by the concatenation of all pages' items. Page order
/// and item order are preserved; duplicates are not filtered.
///
/// A non-final page that omits `nextPageKey` terminates the walk: a warning is
/// logged and the data retrieved so far is returned as-is. This also bounds
/// the loop against a server that reports `lastPage: "false"` forever without
/// ever issuing a cursor.
///
/// # Example
///
/// ```no_run
/// use ttrest_rs::client::fetch_all_pages;
///
/// # async fn example(client: ttrest_rs::TTRestClient) -> ttrest_rs::Result<()> {
/// let users = client.users();
/// let merged = fetch_all_pages(|cursor| users.users(cursor), "users").await?;
/// println!("{} users", merged["users"].as_array().map_or(0, |u| u.len()));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with [`Error::UnexpectedResponse`] when a page is missing the result
/// array or the `lastPage` flag, and propagates any error from `fetch` itself.
pub async fn fetch_all_pages<F, Fut>(fetch: F, results_key: &str) -> Result<Value>
where
    F: Fn(Option<String>) -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    let mut page = fetch(None).await?;
    let mut items = take_items(&mut page, results_key)?;
    let mut is_last = is_last_page(&page)?;
    debug!(results_key, last_page = is_last, "fetched first page");

    while !is_last {
        let Some(cursor) = next_page_key(&page) else {
            warn!(
                results_key,
                "server omitted 'nextPageKey' on a non-final page; \
                 returning the retrieved, but possibly incomplete data"
            );
            break;
        };

        page = fetch(Some(cursor)).await?;
        items.extend(take_items(&mut page, results_key)?);
        is_last = is_last_page(&page)?;
        debug!(
            results_key,
            last_page = is_last,
            total = items.len(),
            "fetched next page"
        );
    }

    match page {
        Value::Object(mut map) => {
            map.insert(results_key.to_string(), Value::Array(items));
            Ok(Value::Object(map))
        }
        _ => Err(Error::UnexpectedResponse(
            "page response is not a JSON object".into(),
        )),
    }
}

/// Remove and return the result array of a page.
fn take_items(page: &mut Value, results_key: &str) -> Result<Vec<Value>> {
    match page.get_mut(results_key).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::UnexpectedResponse(format!(
            "'{results_key}' is not an array"
        ))),
        None => Err(Error::UnexpectedResponse(format!(
            "'{results_key}' missing from page response"
        ))),
    }
}

/// Read the `lastPage` flag, a boolean-valued string compared
/// case-insensitively with surrounding whitespace ignored.
fn is_last_page(page: &Value) -> Result<bool> {
    match page.get("lastPage").and_then(Value::as_str) {
        Some(flag) => Ok(flag.trim().eq_ignore_ascii_case("true")),
        None => Err(Error::UnexpectedResponse(
            "'lastPage' missing from page response or not a string".into(),
        )),
    }
}

/// Read the opaque page cursor. TT issues it as a string or a number; either
/// way it is echoed back as a string.
fn next_page_key(page: &Value) -> Option<String> {
    match page.get("nextPageKey") {
        Some(Value::String(key)) => Some(key.clone()),
        Some(Value::Number(key)) => Some(key.to_string()),
        _ => None,
    }
}
