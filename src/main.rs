use std::env;
use std::time::Duration;

use recipe_suggest::cache::ResultCache;
use recipe_suggest::client::RecipeApiClient;
use recipe_suggest::config::ClientConfig;
use recipe_suggest::controller::RecipeSearchController;
use recipe_suggest::model::Difficulty;
use recipe_suggest::render::{render_detail, render_list};
use recipe_suggest::store::FileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: recipe-suggest [--difficulty 簡単|普通|難しい] <ingredient>...
    //        recipe-suggest --id <recipe-id>
    let mut ingredients: Vec<String> = Vec::new();
    let mut difficulty: Option<Difficulty> = None;
    let mut recipe_id: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" => {
                let label = args.next().ok_or("--difficulty requires a value")?;
                difficulty =
                    Some(Difficulty::from_label(&label).ok_or("unknown difficulty level")?);
            }
            "--id" => {
                recipe_id = Some(args.next().ok_or("--id requires a value")?);
            }
            _ => ingredients.push(arg),
        }
    }

    let config = ClientConfig::load()?;
    let client = RecipeApiClient::new(&config)?;
    let cache = ResultCache::with_ttl(
        Box::new(FileStore::new(&config.cache.dir)?),
        Duration::from_secs(config.cache.ttl_minutes * 60),
    );
    let mut controller = RecipeSearchController::new(client, cache);

    if let Some(id) = recipe_id {
        match controller.recipe_detail(&id).await {
            Ok(recipe) => println!("{}", render_detail(&recipe)),
            Err(_) => eprintln!("{}", controller.error().unwrap_or_default()),
        }
        return Ok(());
    }

    if ingredients.is_empty() {
        return Err("provide at least one ingredient".into());
    }

    controller.search(&ingredients, difficulty).await;
    if let Some(message) = controller.error() {
        eprintln!("{message}");
    }
    print!("{}", render_list(controller.recipes(), controller.is_loading()));

    Ok(())
}
