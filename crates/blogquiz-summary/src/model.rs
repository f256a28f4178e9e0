//! Upstream summary-model abstraction and prompt construction.

use async_trait::async_trait;
use blogquiz_core::model::Post;

use crate::error::SummaryError;

/// Articles beyond this are dropped from the prompt to stay inside the
/// upstream token limit.
pub const MAX_ARTICLES: usize = 5;
/// Full-text excerpt length per article, in characters.
const CONTENT_EXCERPT_CHARS: usize = 500;

/// An upstream model that turns a prompt into summary text.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    fn name(&self) -> &str;

    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError>;
}

fn excerpt(content: &str) -> String {
    content.chars().take(CONTENT_EXCERPT_CHARS).collect()
}

/// Build the Italian summarization prompt from the top search results.
///
/// Callers pass at most [`MAX_ARTICLES`] posts; the prompt asks for an
/// HTML-formatted editorial summary in the blog author's voice.
pub fn build_prompt(results: &[Post], query: &str) -> String {
    let mut articles = String::new();
    for (index, post) in results.iter().enumerate() {
        articles.push_str(&format!(
            "\n=== ARTICOLO {} ===\nTitolo: {}\nCategorie: {}\nContenuto: {}\n",
            index + 1,
            post.title,
            post.categories.join(", "),
            post.excerpt
        ));
        if !post.content.is_empty() {
            articles.push_str(&format!(
                "Testo completo (estratto): {}...\n",
                excerpt(&post.content)
            ));
        }
    }

    format!(
        r#"Sei Franco Bagaglia, docente universitario in Intelligenza Artificiale e umanista digitale. La tua missione è formare menti libere, curiose e capaci di abitare con responsabilità il mondo digitale.

Un utente ha cercato sul tuo blog il termine: "{query}"

Sono stati trovati questi articoli rilevanti:

{articles}

---

COMPITO:
Crea un articolo riassuntivo che incarni i valori dell'Umanesimo Digitale. L'articolo deve:

1. **Sintetizzare le tematiche principali** trovate negli articoli
2. **Estrarre collegamenti concettuali** tra i diversi contenuti
3. **Usare un tono critico, umanistico e accessibile** (come il tuo stile)
4. **Evidenziare l'importanza etica** degli argomenti trattati
5. **Suggerire percorsi di approfondimento** concreti
6. **Stimolare il pensiero critico** del lettore

FORMATO:
Rispondi SOLO con HTML ben formattato, usando questi tag:
- <h3> per i titoli di sezione
- <p> per i paragrafi
- <ul> e <li> per le liste
- <strong> per enfasi
- <em> per citazioni o termini importanti

NON includere tag <html>, <body> o <head>. Solo il contenuto interno.

Inizia con un'introduzione coinvolgente che contestualizzi la ricerca dell'utente."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogquiz_core::sample::sample_posts;

    #[test]
    fn prompt_numbers_articles_and_quotes_query() {
        let posts = sample_posts();
        let prompt = build_prompt(&posts[..2], "etica digitale");

        assert!(prompt.contains("\"etica digitale\""));
        assert!(prompt.contains("=== ARTICOLO 1 ==="));
        assert!(prompt.contains("=== ARTICOLO 2 ==="));
        assert!(!prompt.contains("=== ARTICOLO 3 ==="));
        assert!(prompt.contains(&format!("Titolo: {}", posts[0].title)));
        assert!(prompt.contains(&posts[0].categories.join(", ")));
    }

    #[test]
    fn long_content_is_truncated_on_char_boundary() {
        let mut post = sample_posts().remove(0);
        // Multi-byte characters right around the cut must not split.
        post.content = "è".repeat(600);
        let prompt = build_prompt(&[post], "test");

        let excerpt_line = prompt
            .lines()
            .find(|l| l.starts_with("Testo completo"))
            .unwrap();
        assert!(excerpt_line.ends_with("..."));
        assert_eq!(excerpt_line.matches('è').count(), 500);
    }

    #[test]
    fn empty_content_gets_no_excerpt_line() {
        let mut post = sample_posts().remove(0);
        post.content = String::new();
        let prompt = build_prompt(&[post], "test");
        assert!(!prompt.contains("Testo completo"));
    }
}
