use std::path::Path;

use anyhow::Context;
use stillpoint_analyze::Analyzer;
use stillpoint_lexicon::Lexicon;

use crate::input;

/// Validate a lexicon and compile its matchers.
pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    let lexicon = input::load_lexicon(path)?;
    println!("{}", summary(&lexicon)?);
    Ok(())
}

pub fn dump(path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let lexicon = input::load_lexicon(path)?;
    if json {
        input::print_json(&lexicon)?;
    } else {
        print!("{}", lexicon.to_yaml_string()?);
    }
    Ok(())
}

fn summary(lexicon: &Lexicon) -> anyhow::Result<String> {
    Analyzer::new(lexicon.clone()).context("compiling lexicon matchers")?;
    let keywords: usize = lexicon.moods.iter().map(|m| m.keywords.len()).sum();
    let phrases: usize = lexicon.moods.iter().map(|m| m.phrases.len()).sum();
    let sentiment: usize = lexicon.sentiment.tiers().map(|t| t.words.len()).sum();
    Ok(format!(
        "ok: {} moods, {keywords} keywords, {phrases} phrases, {sentiment} sentiment words, {} stop words",
        lexicon.moods.len(),
        lexicon.vocabulary.stop_words.len()
    ))
}
