use anyhow::{bail, Context, Result};
use recipe_app::catalog::{load_catalog, Catalog};
use recipe_app::cli::{parse_args, Command};
use recipe_app::config::AppConfig;
use recipe_app::matcher::Ranker;
use recipe_app::normalize::parse_ingredient_list;
use recipe_app::ocr::{scan_ingredients, TesseractOcr};
use recipe_app::planner::create_meal_plan;
use recipe_app::session::run_session;
use recipe_app::web;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn load_recipes(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = load_catalog(path)
                .await
                .with_context(|| format!("Failed to load recipe catalog from {:?}", path))?;
            info!(path = ?path, recipes = catalog.len(), "using recipe catalog file");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn print_plan(catalog: &Catalog, names: &str, days: usize) -> Result<()> {
    let mut chosen = Vec::new();
    for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match catalog.find(name) {
            Some(recipe) => chosen.push(recipe),
            None => bail!("Unknown recipe: {}", name),
        }
    }
    if chosen.is_empty() {
        bail!("No recipes given for the meal plan");
    }

    let plan = create_meal_plan(&chosen, days)?;
    println!("Your meal plan:");
    for (day, recipe) in plan.iter() {
        println!(" {}: {}", day, recipe.name);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for settings
    init_logging();

    let cli_args = parse_args();
    let config = AppConfig::from_env()?;
    let catalog_path = cli_args.catalog.clone().or(config.catalog_path.clone());
    let catalog = load_recipes(catalog_path.as_deref()).await?;
    let ocr = TesseractOcr::new(config.tesseract_cmd.clone(), config.ocr_language.clone());

    match cli_args.command.unwrap_or_default() {
        Command::Suggest { ingredients, image } => {
            let preset = match (ingredients, image) {
                (Some(raw), _) => Some(parse_ingredient_list(&raw)),
                (None, Some(image)) => Some(
                    scan_ingredients(&ocr, &image)
                        .await
                        .with_context(|| format!("Failed to read ingredients from {:?}", image))?,
                ),
                (None, None) => None,
            };

            let ranker = Ranker::new(catalog);
            // The prompt loop blocks on stdin, keep it off the async workers.
            tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                run_session(&ranker, preset, &mut stdin.lock(), &mut stdout.lock())
            })
            .await
            .context("Terminal session panicked")??;
        }
        Command::Scan { image } => {
            let ingredients = scan_ingredients(&ocr, &image)
                .await
                .with_context(|| format!("Failed to read ingredients from {:?}", image))?;
            if ingredients.is_empty() {
                println!("No ingredients recognized.");
            }
            for ingredient in ingredients {
                println!("{}", ingredient);
            }
        }
        Command::Plan { recipes, days } => print_plan(&catalog, &recipes, days)?,
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            web::serve(Ranker::new(catalog), &host, port).await?;
        }
    }

    Ok(())
}
