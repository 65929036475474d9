use super::*;
use crate::types::Competition;

#[test]
fn extract_trends_parses_topic_and_description() {
    let text = "AI Regulation: New laws proposed\nQuantum Leap: breakthrough chip unveiled\n";
    let trends = extract_trends(text, Category::Technology, TrendExtraction::SIMPLE);

    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].topic, "AI Regulation");
    assert_eq!(trends[0].description, "New laws proposed");
    assert!((80..=99).contains(&trends[0].relevance));
    assert_eq!(trends[1].topic, "Quantum Leap");
    assert_eq!(trends[1].description, "breakthrough chip unveiled");
    assert!((80..=99).contains(&trends[1].relevance));
}

#[test]
fn extract_trends_caps_at_five() {
    let text = (1..=8)
        .map(|i| format!("Topic number {i}: description line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let trends = extract_trends(&text, Category::Business, TrendExtraction::SIMPLE);
    assert_eq!(trends.len(), MAX_TRENDS);
}

#[test]
fn extract_trends_skips_noise_lines() {
    let text = "ok\n---\nReal Topic Here: something happened\n##\n";
    let trends = extract_trends(text, Category::Health, TrendExtraction::SIMPLE);
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].topic, "Real Topic Here");
}

#[test]
fn extract_trends_strips_list_markup_from_topic() {
    let text = "1. **Edge Computing**: moving inference to devices";
    let trends = extract_trends(text, Category::Technology, TrendExtraction::SIMPLE);
    assert_eq!(trends[0].topic, "Edge Computing");
}

#[test]
fn extract_trends_defaults_description_without_colon() {
    let text = "A colonless trend line that is long enough";
    let trends = extract_trends(text, Category::Lifestyle, TrendExtraction::SIMPLE);
    assert_eq!(trends[0].description, "Trending news in Lifestyle");
    assert!(!trends[0].topic.is_empty());
}

#[test]
fn extract_trends_empty_input_yields_empty_list() {
    assert!(extract_trends("", Category::Technology, TrendExtraction::SIMPLE).is_empty());
    assert!(extract_trends("   \n  \n", Category::Technology, TrendExtraction::SIMPLE).is_empty());
}

#[test]
fn extract_trends_never_produces_empty_fields() {
    // 即使topic被全部剥离也要落到合成默认值
    let text = "1234567*.890: some description";
    let trends = extract_trends(text, Category::Health, TrendExtraction::SIMPLE);
    assert_eq!(trends[0].topic, "Health update");
    assert_eq!(trends[0].description, "some description");
}

#[test]
fn agent_profile_assigns_competition_and_wider_band() {
    let text = "Resilient Topic: with a description attached";
    for _ in 0..32 {
        let trends = extract_trends(text, Category::Technology, TrendExtraction::AGENT);
        assert!((75..=99).contains(&trends[0].relevance));
        assert!(matches!(
            trends[0].competition,
            Some(Competition::Low) | Some(Competition::Medium)
        ));
    }
}

#[test]
fn simple_profile_leaves_competition_unset() {
    let text = "Resilient Topic: with a description attached";
    let trends = extract_trends(text, Category::Technology, TrendExtraction::SIMPLE);
    assert_eq!(trends[0].competition, None);
    assert_eq!(trends[0].search_volume, None);
}

#[test]
fn extract_title_prefers_h1_heading() {
    let text = "intro line\n# The Real Title\n\nBody";
    assert_eq!(extract_title(text, "Fallback"), "The Real Title");
}

#[test]
fn extract_title_accepts_title_prefix() {
    let text = "Title: Prefixed Headline\n\nBody";
    assert_eq!(extract_title(text, "Fallback"), "Prefixed Headline");
}

#[test]
fn extract_title_falls_back_to_topic() {
    assert_eq!(extract_title("no heading here", "Quantum Leap"), "Deep Dive: Quantum Leap");
}

#[test]
fn extract_summary_takes_second_paragraph() {
    let text = "# Title\n\nThis is the summary paragraph.\n\nThe body starts here.";
    assert_eq!(extract_summary(text, None), "This is the summary paragraph.");
}

#[test]
fn extract_summary_truncates_to_prefix() {
    let long = "x".repeat(300);
    let text = format!("# Title\n\n{}\n\nBody", long);
    let summary = extract_summary(&text, Some(SUMMARY_PREFIX_LEN));
    assert!(summary.ends_with("..."));
    assert!(summary.chars().count() <= SUMMARY_PREFIX_LEN + 3);
}

#[test]
fn extract_summary_falls_back_on_single_block() {
    assert_eq!(
        extract_summary("only one block of text", None),
        "Automated summary of the latest trends."
    );
    assert_eq!(extract_summary("", None), "Automated summary of the latest trends.");
}

#[test]
fn extract_sources_keeps_web_entries_only() {
    let chunks: Vec<GroundingChunk> = serde_json::from_value(serde_json::json!([
        { "web": { "title": "TechDaily", "uri": "https://techdaily.example/a" } },
        { "web": { "uri": "https://untitled.example/b" } },
        { "web": { "title": "NoUri" } },
        {}
    ]))
    .unwrap();

    let sources = extract_sources(&chunks);
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].title, "TechDaily");
    assert_eq!(sources[1].title, "Source");
    assert_eq!(sources[1].uri, "https://untitled.example/b");
}

#[test]
fn extract_faq_pairs_questions_and_answers() {
    let text = "## FAQ\n\n**Q:** What is a quantum chip?\n**A:** A processor built on qubits.\n\n**Q:** When will it ship?\n**A:** No date announced yet.\n";
    let faq = extract_faq(text);
    assert_eq!(faq.len(), 2);
    assert_eq!(faq[0].question, "What is a quantum chip?");
    assert_eq!(faq[1].answer, "No date announced yet.");
}

#[test]
fn extract_faq_without_markers_is_empty() {
    assert!(extract_faq("plain article body with no faq section").is_empty());
    // 无配对问题的答案行被忽略
    assert!(extract_faq("**A:** an orphan answer").is_empty());
}

#[test]
fn parse_seo_insights_roundtrip() {
    let insights = parse_seo_insights(r#"{"keywords":["a","b"],"questions":["q1"]}"#);
    assert_eq!(insights.keywords, vec!["a", "b"]);
    assert_eq!(insights.questions, vec!["q1"]);
}

#[test]
fn parse_seo_insights_strips_code_fences() {
    let insights = parse_seo_insights("```json\n{\"keywords\":[\"a\"],\"questions\":[]}\n```");
    assert_eq!(insights.keywords, vec!["a"]);
}

#[test]
fn parse_seo_insights_falls_back_to_empty() {
    let insights = parse_seo_insights("definitely not json");
    assert!(insights.keywords.is_empty());
    assert!(insights.questions.is_empty());
}

#[test]
fn parse_seo_insights_tolerates_missing_fields() {
    let insights = parse_seo_insights(r#"{"keywords":["only"]}"#);
    assert_eq!(insights.keywords, vec!["only"]);
    assert!(insights.questions.is_empty());
}

#[test]
fn word_count_splits_on_whitespace() {
    assert_eq!(word_count("one two\tthree\nfour"), 4);
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   "), 0);
}
