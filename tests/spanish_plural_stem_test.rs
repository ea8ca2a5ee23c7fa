//! Integration tests for the SpanishPluralStem token filter and its factory.

use plurales::analysis::token_filter::SpanishPluralStemFilter;
use plurales::prelude::*;

/// Collect `(text, position, start_offset, end_offset)` for every token.
fn collect(stream: &mut dyn TokenStream) -> Vec<(String, usize, usize, usize)> {
    let mut tokens = Vec::new();
    while stream.advance() {
        let token = stream.token();
        tokens.push((
            token.text.clone(),
            token.position,
            token.start_offset,
            token.end_offset,
        ));
    }
    tokens
}

fn texts(stream: &mut dyn TokenStream) -> Vec<String> {
    collect(stream).into_iter().map(|(text, ..)| text).collect()
}

#[test]
fn test_factory_by_name_stems_plural() -> Result<()> {
    let registry = FilterRegistry::default();
    let upstream = Box::new(WhitespaceTokenizer::from_text("sociedades"));
    let mut stream = registry.build("SpanishPluralStem", upstream, FilterParams::new())?;

    assert_eq!(texts(&mut stream), vec!["sociedad"]);
    Ok(())
}

#[test]
fn test_factory_rejects_bogus_parameter() {
    let registry = FilterRegistry::default();
    let upstream = Box::new(WhitespaceTokenizer::new());
    let params = FilterParams::new().with("bogusArg", "bogusValue");

    let err = registry
        .build("SpanishPluralStem", upstream, params)
        .err()
        .expect("unknown parameter must be rejected");
    assert!(err.to_string().contains("Unknown parameters"));
    assert_eq!(err.as_configuration().unwrap().names, vec!["bogusArg"]);
}

#[test]
fn test_factory_direct_construction() {
    let err = SpanishPluralStemFilterFactory::new(
        FilterParams::new().with("bogusArg", "bogusValue"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown parameters"));

    let factory = SpanishPluralStemFilterFactory::new(FilterParams::new()).unwrap();
    let mut stream = factory.create_filter(WhitespaceTokenizer::from_text("luces voces"));
    assert_eq!(texts(&mut stream), vec!["luz", "voz"]);
}

#[test]
fn test_empty_upstream() {
    let mut filter = StemFilter::new(WhitespaceTokenizer::from_text(""));
    assert!(!filter.advance());
    assert!(!filter.advance());

    let mut filter = StemFilter::new(WhitespaceTokenizer::from_text("   \t\n "));
    assert!(!filter.advance());
}

#[test]
fn test_one_token_out_per_token_in() {
    let text = "Las sociedades anónimas y los árboles";
    let expected = collect(&mut WhitespaceTokenizer::from_text(text));
    let stemmed = collect(&mut StemFilter::new(WhitespaceTokenizer::from_text(text)));

    assert_eq!(stemmed.len(), expected.len());
    for (out, input) in stemmed.iter().zip(&expected) {
        assert_eq!((out.1, out.2, out.3), (input.1, input.2, input.3));
    }

    let stems: Vec<&str> = stemmed.iter().map(|(text, ..)| text.as_str()).collect();
    assert_eq!(stems, vec!["Las", "sociedad", "anónima", "y", "los", "árbol"]);
}

#[test]
fn test_singular_tokens_unchanged() {
    let text = "la sociedad de la crisis del virus un lunes el autobús dijo adiós al compás holandés";
    let mut filter = StemFilter::new(WhitespaceTokenizer::from_text(text));
    let expected: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(texts(&mut filter), expected);
}

#[test]
fn test_plurals_and_singulars_share_stems() {
    let plurals = "holandeses jardines rubíes alemanes corteses autobuses compases";
    let singulars = "holandés jardín rubí alemán cortés autobús compás";

    let mut filter = StemFilter::new(WhitespaceTokenizer::from_text(plurals));
    let from_plurals = texts(&mut filter);
    filter.reset(singulars);
    let from_singulars = texts(&mut filter);

    assert_eq!(from_plurals, from_singulars);
    assert_eq!(from_singulars, singulars.split_whitespace().collect::<Vec<_>>());
}

#[test]
fn test_reset_replays_new_input() {
    let mut filter: SpanishPluralStemFilter<WhitespaceTokenizer> =
        StemFilter::new(WhitespaceTokenizer::from_text("canciones"));
    assert!(filter.advance());
    filter.reset("lápices rojos");
    assert_eq!(
        collect(&mut filter),
        vec![
            ("lápiz".to_string(), 0, 0, 8),
            ("rojo".to_string(), 1, 9, 14),
        ]
    );

    filter.reset("");
    assert!(!filter.advance());
}

#[test]
fn test_lowercase_then_stem_chain() -> Result<()> {
    let config = AnalysisConfig::from_json_str(
        r#"{"filters": [{"name": "LowerCase"}, {"name": "SpanishPluralStem"}]}"#,
    )?;
    let registry = FilterRegistry::default();
    let mut stream = registry.build_chain(
        Box::new(WhitespaceTokenizer::from_text("SOCIEDADES Canciones")),
        &config.filters,
    )?;
    assert_eq!(texts(&mut stream), vec!["sociedad", "canción"]);
    Ok(())
}

#[test]
fn test_stem_without_lowercase_is_literal() {
    let mut filter = StemFilter::new(WhitespaceTokenizer::from_text("SOCIEDADES"));
    assert_eq!(texts(&mut filter), vec!["SOCIEDADES"]);
}

#[test]
fn test_unknown_filter_name() {
    let registry = FilterRegistry::default();
    let err = registry
        .build("Klingon", Box::new(WhitespaceTokenizer::new()), FilterParams::new())
        .err()
        .unwrap();
    assert!(matches!(err, PluralesError::UnknownFilter(ref name) if name == "Klingon"));
    assert!(err.as_configuration().is_none());
}
