//! Translate one phrase through the fallback chain
//!
//! Usage: cargo run --example translate_once -- "Good morning" fr

use dotenvy::dotenv;
use polyglot::{TranslationRequest, TranslationResolver};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, world!".to_string());
    let target = std::env::args().nth(2).unwrap_or_else(|| "es".to_string());

    println!("=== Polyglot demo ===");
    println!("Text: {}", text);
    println!("Target: {}", target);

    let resolver = TranslationResolver::from_env().expect("valid resolver configuration");

    let result = resolver
        .resolve(&TranslationRequest::new(text, target))
        .await;

    match &result.provider_used {
        Some(provider) => {
            println!("\n✅ {}", result.translated_text);
            println!("Provider: {}", provider);
        }
        None => {
            println!("\n❌ Every provider failed, echoing the input:");
            println!("{}", result.translated_text);
        }
    }
}
