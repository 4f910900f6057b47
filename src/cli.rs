use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::planner::DEFAULT_PLAN_DAYS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON or CSV recipe catalog (overrides RECIPE_CATALOG)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Suggest recipes interactively (default)
    Suggest {
        /// Comma-separated ingredients; skips the ingredient prompt
        #[arg(short, long)]
        ingredients: Option<String>,
        /// Photo of an ingredient list to read with OCR
        #[arg(long, conflicts_with = "ingredients")]
        image: Option<PathBuf>,
    },
    /// Print the ingredients OCR finds in an image
    Scan {
        #[arg(long)]
        image: PathBuf,
    },
    /// Print a weekly meal plan for the named recipes
    Plan {
        /// Comma-separated recipe names, in the order to cycle them
        #[arg(short, long)]
        recipes: String,
        #[arg(short, long, default_value_t = DEFAULT_PLAN_DAYS)]
        days: usize,
    },
    /// Run the web interface
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Suggest {
            ingredients: None,
            image: None,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_suggest() {
        let cli = Cli::parse_from(["recipe_app"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_plan_arguments() {
        let cli = Cli::parse_from(["recipe_app", "plan", "--recipes", "Omelette, Fresh Salad", "--catalog", "r.json"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("r.json")));
        assert_eq!(
            cli.command,
            Some(Command::Plan {
                recipes: "Omelette, Fresh Salad".to_string(),
                days: 7
            })
        );
    }

    #[test]
    fn test_ingredients_conflict_with_image() {
        let result = Cli::try_parse_from(["recipe_app", "suggest", "-i", "eggs", "--image", "list.png"]);
        assert!(result.is_err());
    }
}
