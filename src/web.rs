//! HTML form and JSON endpoints in front of the ranker.

use anyhow::{Context as _, Result};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tera::{Context, Tera};
use tracing::{error, info};

use crate::matcher::{Ranker, Suggestion};
use crate::normalize::parse_ingredient_list;
use crate::recipe::{AvailableIngredients, Recipe};

const INDEX_TEMPLATE: &str = "index.html";

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
    <title>RecipeApp</title>
    <style>
      body { font-family: Arial, sans-serif; margin: 2rem; }
      .container { max-width: 600px; margin: auto; }
      input[type=text] { width: 100%; padding: 8px; margin: 8px 0; box-sizing: border-box; }
      button { padding: 10px 20px; font-size: 1rem; }
      table { width: 100%; border-collapse: collapse; margin-top: 20px; }
      th, td { text-align: left; padding: 8px; border-bottom: 1px solid #ddd; }
    </style>
  </head>
  <body>
    <div class="container">
      <h1>RecipeApp</h1>
      <p>Enter the ingredients you have (comma separated) to see which recipes you can make.</p>
      <form action="/suggest" method="post">
        <input type="text" name="ingredients" placeholder="e.g. pasta, tomato, cheese" value="{{ entered }}" required>
        <button type="submit">Get Suggestions</button>
      </form>
      {% if rows %}
      <h2>Suggestions</h2>
      <table>
        <tr><th>Recipe</th><th>Status</th><th>Missing Ingredients</th></tr>
        {% for row in rows %}
        <tr>
          <td>{{ row.name }}</td>
          <td>{{ row.status }}</td>
          <td>{% if row.missing %}{{ row.missing | join(sep=", ") }}{% else %}—{% endif %}</td>
        </tr>
        {% endfor %}
      </table>
      {% endif %}
    </div>
  </body>
</html>
"#;

#[derive(Clone)]
pub struct AppState {
    ranker: Ranker,
    templates: Arc<Tera>,
}

impl AppState {
    pub fn new(ranker: Ranker) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, INDEX_HTML)
            .context("Failed to compile index template")?;
        Ok(Self {
            ranker,
            templates: Arc::new(tera),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestForm {
    #[serde(default)]
    pub ingredients: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse<'a> {
    pub suggestions: Vec<Suggestion<'a>>,
}

// One table row, flattened for the template.
#[derive(Debug, Serialize)]
struct SuggestionRow<'a> {
    name: &'a str,
    status: String,
    missing: Vec<&'a str>,
}

impl<'a> From<&Suggestion<'a>> for SuggestionRow<'a> {
    fn from(suggestion: &Suggestion<'a>) -> Self {
        let recipe: &'a Recipe = suggestion.recipe;
        Self {
            name: &recipe.name,
            status: if suggestion.is_ready() {
                "Ready".to_string()
            } else {
                format!("Missing {}", suggestion.missing.len())
            },
            missing: suggestion.missing.iter().map(|&i| i.as_str()).collect(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/suggest", post(suggest_form))
        .route("/api/suggestions", post(suggest_json))
        .with_state(state)
}

fn render_index(state: &AppState, entered: &str, rows: &[SuggestionRow<'_>]) -> Response {
    let mut context = Context::new();
    context.insert("entered", entered);
    context.insert("rows", rows);

    match state.templates.render(INDEX_TEMPLATE, &context) {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render index page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, "", &[])
}

async fn suggest_form(State(state): State<AppState>, Form(form): Form<SuggestForm>) -> Response {
    let available: AvailableIngredients = parse_ingredient_list(&form.ingredients).into_iter().collect();
    let suggestions = state.ranker.rank(&available);
    let rows: Vec<SuggestionRow<'_>> = suggestions.iter().map(SuggestionRow::from).collect();
    render_index(&state, &form.ingredients, &rows)
}

async fn suggest_json(State(state): State<AppState>, Json(request): Json<SuggestRequest>) -> Response {
    let available = AvailableIngredients::new(&request.ingredients);
    let suggestions = state.ranker.rank(&available);
    Json(SuggestResponse { suggestions }).into_response()
}

/// Binds `host:port` and serves until the process is stopped.
pub async fn serve(ranker: Ranker, host: &str, port: u16) -> Result<()> {
    let state = AppState::new(ranker)?;
    let address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind web server to {}", address))?;

    info!(bind_address = %address, "web server started");
    axum::serve(listener, router(state))
        .await
        .context("Web server terminated unexpectedly")?;
    Ok(())
}
