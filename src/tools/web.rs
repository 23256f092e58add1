//! Web search through the Serper Google Search API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";
const DEFAULT_NUM_RESULTS: u64 = 5;

/// Search the web via `google.serper.dev`.
pub struct SerperSearch {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl SerperSearch {
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerperResponse {
    #[serde(default)]
    answer_box: Option<AnswerBox>,
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct AnswerBox {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

#[async_trait]
impl Tool for SerperSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the internet for information. Returns results with titles, snippets and links. Use it to look up history and facts about a place."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "num_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return (default: 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;
        let num_results = args["num_results"].as_u64().unwrap_or(DEFAULT_NUM_RESULTS);

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("SERPER_API_KEY is not configured"))?;

        tracing::debug!(query, "Running web search");

        let response = self
            .client
            .post(SERPER_SEARCH_URL)
            .header("X-API-KEY", api_key)
            .json(&json!({ "q": query, "num": num_results }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("Search API error: {}", status));
        }

        let body: SerperResponse = response.json().await?;
        let results = format_results(&body, num_results as usize);

        if results.is_empty() {
            Ok(format!("No results found for: {}", query))
        } else {
            Ok(results.join("\n\n"))
        }
    }
}

fn format_results(body: &SerperResponse, limit: usize) -> Vec<String> {
    let mut results = Vec::new();

    if let Some(answer) = &body.answer_box {
        let text = answer.answer.as_deref().or(answer.snippet.as_deref());
        if let Some(text) = text {
            match &answer.title {
                Some(title) => results.push(format!("Answer: **{}**\n{}", title, text)),
                None => results.push(format!("Answer: {}", text)),
            }
        }
    }

    for item in body.organic.iter().filter(|r| !r.title.is_empty()).take(limit) {
        results.push(format!(
            "**{}**\n{}\nURL: {}",
            item.title,
            item.snippet.as_deref().unwrap_or("No snippet"),
            item.link
        ));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SerperResponse {
        serde_json::from_value(json!({
            "searchParameters": { "q": "Sigiriya mirror wall" },
            "answerBox": {
                "title": "Mirror Wall",
                "snippet": "A polished wall covered in ancient graffiti."
            },
            "organic": [
                {
                    "title": "Sigiriya - Wikipedia",
                    "link": "https://en.wikipedia.org/wiki/Sigiriya",
                    "snippet": "Sigiriya is an ancient rock fortress.",
                    "position": 1
                },
                {
                    "title": "",
                    "link": "https://example.com/untitled"
                },
                {
                    "title": "Sigiriya graffiti",
                    "link": "https://example.com/graffiti",
                    "position": 3
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn formats_answer_box_then_organic() {
        let results = format_results(&sample(), 5);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0],
            "Answer: **Mirror Wall**\nA polished wall covered in ancient graffiti."
        );
        assert_eq!(
            results[1],
            "**Sigiriya - Wikipedia**\nSigiriya is an ancient rock fortress.\nURL: https://en.wikipedia.org/wiki/Sigiriya"
        );
        assert!(results[2].contains("No snippet"));
    }

    #[test]
    fn respects_result_limit() {
        let results = format_results(&sample(), 1);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn empty_response_has_no_results() {
        assert!(format_results(&SerperResponse::default(), 5).is_empty());
    }

    #[tokio::test]
    async fn requires_query_argument() {
        let tool = SerperSearch::new(reqwest::Client::new(), Some("key".to_string()));
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[tokio::test]
    async fn requires_api_key() {
        let tool = SerperSearch::new(reqwest::Client::new(), None);
        let err = tool.execute(json!({ "query": "Sigiriya" })).await.unwrap_err();
        assert!(err.to_string().contains("SERPER_API_KEY"));
    }
}
