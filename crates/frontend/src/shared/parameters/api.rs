//! API client for query-backed parameter dropdowns

use contracts::shared::parameters::{DropdownOption, DropdownValuesResponse};
use gloo_net::http::Request;

const BASE_URL: &str = "/api/queries";

/// Load the selectable values produced by a dropdown's source query
pub async fn load_dropdown_values(query_id: i64) -> Result<Vec<DropdownOption>, String> {
    let response: DropdownValuesResponse =
        Request::get(&format!("{}/{}/dropdown", BASE_URL, query_id))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;
    Ok(response.options)
}
