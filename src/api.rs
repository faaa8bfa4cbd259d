//! Calls against the Flask backend.
//!
//! Two endpoints: `GET /dados_grafico` for the weekly aggregates and
//! `POST /adicionar` for new entries. The entry body is classic form
//! encoding because that is what the backend reads (`request.form`).

use gloo_net::http::Request;
use thiserror::Error;
use url::form_urlencoded;

use crate::categories::Direction;
use crate::chart::{ShapeError, WeeklyChart, WeeklyChartResponse};
use crate::money::wire_valor;

const API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Fetches and validates the weekly chart data.
///
/// A non-OK status, a body that is not the documented JSON shape and arrays
/// that do not line up all surface as errors; the caller decides what the
/// failure state looks like.
pub async fn fetch_weekly_chart() -> Result<WeeklyChart, ApiError> {
    let url = format!("{}/dados_grafico", API_BASE_URL);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body = response.text().await?;
    let parsed: WeeklyChartResponse = serde_json::from_str(&body)?;
    Ok(WeeklyChart::try_from(parsed)?)
}

/// Posts a new entry. The backend answers with a redirect to the page it
/// serves itself; only the status matters here.
pub async fn submit_entry(
    direction: Direction,
    centavos: i64,
    description: &str,
) -> Result<(), ApiError> {
    let url = format!("{}/adicionar", API_BASE_URL);
    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(entry_form_body(direction, centavos, description))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Form body for `POST /adicionar`: `tipo`, `valor` (reais, dot decimal,
/// two places) and `descricao`, percent-encoded.
pub fn entry_form_body(direction: Direction, centavos: i64, description: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("tipo", direction.as_key())
        .append_pair("valor", &wire_valor(centavos))
        .append_pair("descricao", description)
        .finish()
}

/// Final description text for an entry. The backend has no columns for the
/// fuel details, so litres and odometer reading travel inside `descricao`.
pub fn entry_description(base: &str, litres: &str, odometer: &str) -> String {
    let base = base.trim();
    let litres = litres.trim();
    let odometer = odometer.trim();

    let mut details = Vec::new();
    if !litres.is_empty() {
        details.push(format!("{litres} L"));
    }
    if !odometer.is_empty() {
        details.push(format!("{odometer} km"));
    }

    if details.is_empty() {
        base.to_string()
    } else {
        format!("{} ({})", base, details.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_entry_form_body() {
        assert_eq!(
            entry_form_body(Direction::Expense, 1_250, "Troca de óleo"),
            "tipo=saida&valor=12.50&descricao=Troca+de+%C3%B3leo"
        );
        assert_eq!(
            entry_form_body(Direction::Income, 123_456, "iFood"),
            "tipo=entrada&valor=1234.56&descricao=iFood"
        );
    }

    #[test]
    fn plain_entries_keep_their_description() {
        assert_eq!(entry_description("Almoço", "", ""), "Almoço");
        assert_eq!(entry_description("  Almoço  ", " ", ""), "Almoço");
    }

    #[test]
    fn fuel_details_travel_inside_the_description() {
        assert_eq!(
            entry_description("Gasolina", "8,5", "45320"),
            "Gasolina (8,5 L, 45320 km)"
        );
        assert_eq!(entry_description("Gasolina", "8,5", ""), "Gasolina (8,5 L)");
        assert_eq!(entry_description("Gasolina", "", "45320"), "Gasolina (45320 km)");
    }
}
