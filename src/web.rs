//! Web page for the calculator
//!
//! Every request is rendered from scratch; handlers hold no state.

use std::fmt::Write as _;

use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::calculator::{self, format_volume};
use crate::error::CalcError;
use crate::models::{
    Calculation, GRAMS_DEFAULT, GRAMS_MAX, GRAMS_MIN, INPUT_STEP, PERCENTAGE_DEFAULT,
    PERCENTAGE_MAX, PERCENTAGE_MIN,
};
use crate::parse;
use crate::reference::{
    self, BEVERAGES, CAUTIONS, GUIDANCE_NOTE, GUIDANCE_SOURCE, INTAKE_GUIDANCE,
};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", get(calculate_page))
        .route("/api/volume", get(calculate_json))
        .route("/health", get(|| async { "ok" }))
}

/// Raw form fields as submitted; parsed by hand so bad input gets a readable message
#[derive(Debug, Default, Deserialize)]
pub struct CalcQuery {
    pub percentage: Option<String>,
    pub grams: Option<String>,
}

impl CalcQuery {
    fn calculate(&self) -> Result<Calculation, CalcError> {
        let percentage = required(&self.percentage, "alcohol percentage")?;
        let grams = required(&self.grams, "target alcohol")?;
        calculator::calculate_raw(
            parse::parse_percentage(percentage)?,
            parse::parse_grams(grams)?,
        )
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, CalcError> {
    value.as_deref().ok_or(CalcError::Missing { field })
}

/// Unwrap the query, turning a rejected query string into a [`CalcError`] the handlers can render
fn read_query(query: Result<Query<CalcQuery>, QueryRejection>) -> Result<CalcQuery, CalcError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| CalcError::BadQuery(rejection.body_text()))
}

async fn index() -> Html<String> {
    let page = Page {
        percentage: PERCENTAGE_DEFAULT.to_string(),
        grams: GRAMS_DEFAULT.to_string(),
        outcome: None,
    };
    Html(page.render())
}

async fn calculate_page(query: Result<Query<CalcQuery>, QueryRejection>) -> Response {
    let (q, outcome) = match read_query(query) {
        Ok(q) => {
            let outcome = q.calculate();
            (q, outcome)
        }
        Err(e) => (CalcQuery::default(), Err(e)),
    };
    let status = match &outcome {
        Ok(calc) => {
            tracing::info!(
                percentage = calc.alcohol_percentage.value(),
                grams = calc.target_grams.value(),
                volume_ml = calc.volume_ml,
                "calculation served"
            );
            StatusCode::OK
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected calculation input");
            StatusCode::BAD_REQUEST
        }
    };

    let page = Page {
        percentage: q.percentage.unwrap_or_else(|| PERCENTAGE_DEFAULT.to_string()),
        grams: q.grams.unwrap_or_else(|| GRAMS_DEFAULT.to_string()),
        outcome: Some(outcome),
    };
    (status, Html(page.render())).into_response()
}

async fn calculate_json(
    query: Result<Query<CalcQuery>, QueryRejection>,
) -> Result<Json<Calculation>, ApiError> {
    let q = read_query(query)?;
    q.calculate().map(Json).map_err(ApiError::from)
}

/// JSON error body for the API route
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::BAD_REQUEST);
        let body = Json(serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        }));
        (status, body).into_response()
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError {
            code: StatusCode::BAD_REQUEST.as_u16(),
            message: err.to_string(),
        }
    }
}

struct Page {
    percentage: String,
    grams: String,
    outcome: Option<Result<Calculation, CalcError>>,
}

impl Page {
    fn render(&self) -> String {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Alcohol Intake Calculator</title>\n</head>\n<body>\n",
        );

        html.push_str("<aside id=\"formula\">\n<h3>Formula</h3>\n");
        let _ = writeln!(html, "<p><code>{}</code></p>", escape(reference::FORMULA));
        let _ = writeln!(html, "<p>{}</p>\n</aside>", reference::density_note());

        html.push_str("<main>\n<h1>Alcohol Intake Calculator</h1>\n");
        html.push_str(
            "<p>Works out how much of a drink to pour from a target amount of pure \
             alcohol and the drink's alcohol percentage.</p>\n",
        );

        self.render_form(&mut html);

        match &self.outcome {
            Some(Ok(calc)) => {
                render_result(&mut html, calc);
                render_reference(&mut html);
            }
            Some(Err(e)) => {
                let _ = writeln!(
                    html,
                    "<div class=\"error\" role=\"alert\">Calculation error: {}</div>",
                    escape(&e.to_string())
                );
            }
            None => {}
        }

        html.push_str("<hr>\n<h3>Cautions</h3>\n<ul>\n");
        for c in CAUTIONS {
            let _ = writeln!(html, "<li>{}</li>", c);
        }
        html.push_str("</ul>\n</main>\n</body>\n</html>\n");
        html
    }

    fn render_form(&self, html: &mut String) {
        html.push_str("<h2>Parameters</h2>\n<form action=\"/calculate\" method=\"get\">\n");
        let _ = writeln!(
            html,
            "<label>Alcohol percentage (%) <input type=\"number\" name=\"percentage\" \
             min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" required \
             title=\"The percentage printed on the label\"></label>",
            PERCENTAGE_MIN,
            PERCENTAGE_MAX,
            INPUT_STEP,
            escape(&self.percentage)
        );
        let _ = writeln!(
            html,
            "<label>Target alcohol (g) <input type=\"number\" name=\"grams\" \
             min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" required \
             title=\"Grams of pure alcohol you want to take in\"></label>",
            GRAMS_MIN,
            GRAMS_MAX,
            INPUT_STEP,
            escape(&self.grams)
        );
        html.push_str("<button type=\"submit\">Calculate</button>\n</form>\n");
    }
}

fn render_result(html: &mut String, calc: &Calculation) {
    let volume = format_volume(calc.volume_ml);

    html.push_str("<section id=\"result\">\n<h2>Result</h2>\n<dl class=\"metrics\">\n");
    let _ = writeln!(html, "<dt>Volume to drink</dt><dd>{}</dd>", volume);
    let _ = writeln!(html, "<dt>Alcohol percentage</dt><dd>{}</dd>", calc.alcohol_percentage);
    let _ = writeln!(html, "<dt>Target alcohol</dt><dd>{}</dd>", calc.target_grams);
    html.push_str("</dl>\n<ul class=\"details\">\n");
    let _ = writeln!(html, "<li>Alcohol percentage: {}</li>", calc.alcohol_percentage);
    let _ = writeln!(html, "<li>Target alcohol: {}</li>", calc.target_grams);
    let _ = writeln!(html, "<li>{}</li>", reference::density_note());
    let _ = writeln!(html, "<li><strong>Volume to drink: {}</strong></li>", volume);
    html.push_str("</ul>\n</section>\n");
}

fn render_reference(html: &mut String) {
    html.push_str("<section id=\"reference\">\n<h2>Reference</h2>\n");

    html.push_str("<h3>Typical alcohol percentages</h3>\n<table>\n");
    for b in BEVERAGES {
        let _ = writeln!(html, "<tr><th>{}</th><td>{}</td></tr>", b.name, b);
    }
    html.push_str("</table>\n");

    html.push_str("<h3>Moderate drinking</h3>\n<div class=\"warning\">\n");
    let _ = writeln!(html, "<p><strong>{}:</strong></p>\n<ul>", GUIDANCE_SOURCE);
    for (group, amount) in INTAKE_GUIDANCE {
        let _ = writeln!(html, "<li>{}: {}</li>", group, amount);
    }
    let _ = writeln!(html, "</ul>\n<p>{}</p>\n</div>\n</section>", GUIDANCE_NOTE);
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let q = CalcQuery {
            percentage: Some("5".into()),
            grams: None,
        };
        assert_eq!(
            q.calculate(),
            Err(CalcError::Missing {
                field: "target alcohol"
            })
        );
        assert_eq!(
            CalcError::Missing {
                field: "alcohol percentage"
            }
            .to_string(),
            "alcohol percentage is required"
        );
    }

    #[test]
    fn test_form_only_page_has_no_result() {
        let page = Page {
            percentage: "5".into(),
            grams: "20".into(),
            outcome: None,
        };
        let html = page.render();
        assert!(html.contains("name=\"percentage\""));
        assert!(!html.contains("id=\"result\""));
        assert!(!html.contains("id=\"reference\""));
        assert!(html.contains("Drink in moderation"));
    }
}
