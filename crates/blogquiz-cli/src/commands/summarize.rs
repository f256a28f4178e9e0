//! The `blogquiz summarize` command.

use anyhow::{Context, Result};

use blogquiz_core::search::search;
use blogquiz_core::store::PostStore;
use blogquiz_summary::types::SummarizeSuccess;
use blogquiz_summary::{GeminiModel, SummarizeProxy, SummaryClient};

use crate::config::BlogquizConfig;

pub async fn execute(store: &PostStore, query: &str, config: &BlogquizConfig) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("inserisci un termine di ricerca");
    }

    let results = search(store, query);
    if results.is_empty() {
        println!("Nessun articolo trovato per \"{query}\": niente da riassumere.");
        return Ok(());
    }

    let response = if let Some(url) = &config.summarize_url {
        let client = SummaryClient::new(url);
        client
            .generate(&results, query)
            .await
            .context("summary request failed")?
    } else if let Some(key) = &config.gemini_key {
        // No deployed endpoint: run the proxy logic in-process against Gemini.
        let proxy = SummarizeProxy::new(Box::new(GeminiModel::new(key, None)));
        let body = serde_json::to_string(&blogquiz_summary::types::SummarizeRequest {
            results: results.clone(),
            query: query.to_string(),
        })?;
        let response = proxy.handle("POST", &body).await;
        if response.status != 200 {
            anyhow::bail!("summary generation failed (HTTP {}): {}", response.status, response.body);
        }
        serde_json::from_str::<SummarizeSuccess>(&response.body)
            .context("unexpected summary response")?
    } else {
        anyhow::bail!(
            "no summarize endpoint or Gemini key configured; \
             set summarize_url or gemini_key in blogquiz.toml, \
             or the BLOGQUIZ_GEMINI_KEY environment variable"
        );
    };

    println!("{}\n", response.summary);
    println!(
        "Articoli analizzati: {} | Query: \"{}\" | Generato in {}ms | {}",
        response.metadata.articles_analyzed,
        response.metadata.query,
        response.metadata.generation_time_ms,
        response.metadata.timestamp
    );

    Ok(())
}
