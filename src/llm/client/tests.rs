use serde_json::json;

use super::gemini::*;
use super::*;

#[test]
fn request_serializes_camel_case_with_search_tool() {
    let request = GenerateContentRequest {
        contents: vec![Content::user("find trends")],
        system_instruction: Some(Content::system("you are a researcher")),
        tools: vec![Tool::google_search()],
        generation_config: Some(GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(8192),
            response_mime_type: None,
            response_schema: None,
        }),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(value["contents"][0]["parts"][0]["text"], "find trends");
    assert_eq!(
        value["systemInstruction"]["parts"][0]["text"],
        "you are a researcher"
    );
    assert!(value["tools"][0]["google_search"].is_object());
    assert_eq!(value["generationConfig"]["maxOutputTokens"], 8192);
    // systemInstruction块不携带role
    assert!(value["systemInstruction"].get("role").is_none());
}

#[test]
fn request_omits_empty_tools_and_schema() {
    let request = GenerateContentRequest {
        contents: vec![Content::user("hello")],
        system_instruction: None,
        tools: Vec::new(),
        generation_config: Some(GenerationConfig::default()),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("tools").is_none());
    assert!(value.get("systemInstruction").is_none());
    assert!(value["generationConfig"].get("responseSchema").is_none());
}

#[test]
fn schema_constrained_request_sets_json_mime_type() {
    let request = GenerateContentRequest {
        contents: vec![Content::user("extract")],
        system_instruction: None,
        tools: Vec::new(),
        generation_config: Some(GenerationConfig {
            temperature: None,
            max_output_tokens: None,
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(json!({ "type": "OBJECT" })),
        }),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
}

#[test]
fn response_text_joins_all_parts() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "Hello " }, { "text": "world" }]
            }
        }]
    }))
    .unwrap();

    assert_eq!(response.text(), "Hello world");
    assert!(response.grounding_chunks().is_empty());
}

#[test]
fn response_without_candidates_degrades_to_empty() {
    let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(response.text(), "");
    assert!(response.grounding_chunks().is_empty());
}

#[test]
fn response_parses_grounding_metadata() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "grounded answer" }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "title": "TechDaily", "uri": "https://techdaily.example/a" } },
                    { "retrievedContext": { "title": "not web" } }
                ]
            }
        }]
    }))
    .unwrap();

    let chunks = response.grounding_chunks();
    assert_eq!(chunks.len(), 2);
    assert_eq!(
        chunks[0].web.as_ref().unwrap().uri.as_deref(),
        Some("https://techdaily.example/a")
    );
    assert!(chunks[1].web.is_none());
}

#[test]
fn api_error_body_parses_message() {
    let body: ApiErrorBody = serde_json::from_str(
        r#"{"error": {"code": 429, "message": "quota exhausted", "status": "RESOURCE_EXHAUSTED"}}"#,
    )
    .unwrap();
    assert_eq!(body.error.code, 429);
    assert_eq!(body.error.message, "quota exhausted");
}

#[test]
fn endpoint_trims_trailing_slash() {
    let mut config = Config::default();
    config.llm.api_base_url = "http://localhost:9999/".to_string();
    let client = LLMClient::new(config).unwrap();
    assert_eq!(
        client.endpoint("test-model"),
        "http://localhost:9999/v1beta/models/test-model:generateContent"
    );
}
