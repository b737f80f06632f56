//! Quick connectivity check against the provider chain

use dotenvy::dotenv;
use polyglot::TranslationResolver;

#[tokio::main]
async fn main() {
    dotenv().ok();

    println!("=== Provider probe ===");

    let resolver = TranslationResolver::from_env().expect("valid resolver configuration");

    if resolver.probe().await {
        println!("✅ Providers reachable");
    } else {
        println!("❌ No provider answered with a translation");
    }
}
