//! Description synthesis: blends the submitted thought with a random quote.
//!
//! The quote service is best-effort; any failure there degrades to one of the
//! self-contained fallback templates, so synthesis itself never fails.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::error;

use crate::constants::QUOTE_TIMEOUT;

/// A quotation fetched from the external quote service.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub content: String,
    /// The attributed author, `Unknown` when the service omits it.
    #[serde(default = "unknown_author")]
    pub author: String,
}

fn unknown_author() -> String {
    "Unknown".to_string()
}

const COLOR_PALETTES: [&str; 6] = [
    "deep blues and golden yellows",
    "emerald greens and soft purples",
    "warm oranges and peaceful whites",
    "rich burgundies and silver accents",
    "sunset reds and calming turquoise",
    "royal purples and gentle golds",
];

const MANDALA_ELEMENTS: [&str; 6] = [
    "lotus petals radiating from the center",
    "intricate geometric patterns and sacred symbols",
    "flowing arabesque designs and celestial motifs",
    "delicate floral patterns and spiritual emblems",
    "crystalline structures and nature-inspired forms",
    "tribal patterns and cosmic representations",
];

/// Fetches one random quote from the quote service.
///
/// Returns `None` on transport errors, timeouts, non-success statuses or
/// undecodable bodies; failures are logged and never propagated.
pub async fn fetch_random_quote(client: &reqwest::Client, quote_api_url: &str) -> Option<Quote> {
    let url = format!("{}/random", quote_api_url.trim_end_matches('/'));
    let response = match client.get(&url).timeout(QUOTE_TIMEOUT).send().await {
        Ok(response) => response,
        Err(err) => {
            error!("Error fetching quote: {}", err);
            return None;
        }
    };
    if !response.status().is_success() {
        error!("Quote service returned {}", response.status());
        return None;
    }
    match response.json::<Quote>().await {
        Ok(quote) => Some(quote),
        Err(err) => {
            error!("Error decoding quote response: {}", err);
            None
        }
    }
}

/// Builds the quote-driven description from the thought and a fetched quote,
/// drawing a color palette and a set of design elements from `rng`.
pub fn compose_description<R: Rng + ?Sized>(thought: &str, quote: &Quote, rng: &mut R) -> String {
    let color_palette = COLOR_PALETTES
        .choose(rng)
        .copied()
        .unwrap_or(COLOR_PALETTES[0]);
    let elements = MANDALA_ELEMENTS
        .choose(rng)
        .copied()
        .unwrap_or(MANDALA_ELEMENTS[0]);

    format!(
        "Inspired by your thought \"{thought}\" and the wisdom \"{content}\" by {author}, envision a magnificent mandala blooming with {color_palette}. \n\nAt its heart lies a perfect symmetrical design featuring {elements}, each detail reflecting the essence of your inner contemplation. The patterns flow outward in harmonious waves, creating a sacred space for meditation and self-reflection.\n\nThis mandala serves as a visual representation of your thoughts transformed into art, a bridge between the tangible and the spiritual, inviting you to find peace and clarity within its intricate beauty.",
        content = quote.content,
        author = quote.author,
    )
}

/// Builds one of the self-contained fallback descriptions, used when no quote
/// is available. Embeds the thought only.
pub fn fallback_description<R: Rng + ?Sized>(thought: &str, rng: &mut R) -> String {
    let descriptions = fallback_descriptions(thought);
    let index = rng.random_range(0..descriptions.len());
    descriptions[index].clone()
}

pub(crate) fn fallback_descriptions(thought: &str) -> [String; 5] {
    [
        format!(
            "A serene mandala emerges from your thought \"{thought}\", featuring concentric circles of wisdom and tranquility. Delicate patterns dance in harmony, creating a sacred geometry that speaks to the soul and invites peaceful contemplation."
        ),
        format!(
            "Inspired by \"{thought}\", this mandala unfolds like a spiritual flower, with intricate petals of light and shadow. Each curve and line represents a moment of clarity, woven together in perfect symmetry."
        ),
        format!(
            "Your reflection \"{thought}\" transforms into a luminous mandala, where ancient symbols and modern inspiration converge. The design radiates outward from a central point of pure consciousness, creating ripples of artistic beauty."
        ),
        format!(
            "From the depths of \"{thought}\" springs forth a mandala of extraordinary detail. Geometric patterns intertwine with organic forms, creating a visual meditation that bridges the gap between mind and spirit."
        ),
        format!(
            "This mandala, born from your contemplation \"{thought}\", presents itself as a kaleidoscope of inner wisdom. Symmetrical designs flow in perfect balance, each element carefully placed to inspire peace and introspection."
        ),
    ]
}

/// Synthesizes the mandala description for a non-empty thought.
///
/// Never fails outward: quote-service failures fall back to
/// [`fallback_description`]. The result always contains the thought.
pub async fn synthesize<R: Rng>(
    client: &reqwest::Client,
    quote_api_url: &str,
    thought: &str,
    rng: &mut R,
) -> String {
    match fetch_random_quote(client, quote_api_url).await {
        Some(quote) => compose_description(thought, &quote, rng),
        None => fallback_description(thought, rng),
    }
}
