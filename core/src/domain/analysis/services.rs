use crate::domain::{
    analysis::{
        entities::{AnalysisResult, DetectedIngredient, IngredientExtraction},
        helpers::{normalize_name, partition_ingredients, scan_transcript},
        ports::{AnalysisService, LLMClient, RecipeBackend},
        schema::{ingredient_extraction_schema, recipe_analysis_schema},
        value_objects::{AnalysisStrategy, AnalyzeVideoInput},
    },
    captions::{ports::CaptionsProvider, value_objects::VideoId},
    common::{entities::app_errors::CoreError, services::Service},
};
use serde::Deserialize;

const ANALYZE_SYSTEM_PROMPT: &str = "\
You are a highly accurate cooking assistant.

Your task is to analyze a recipe video link and determine ingredients.

Rules:
- Extract the dish name if possible.
- Use the URL context (title, description, transcript if available).
- Cross-check ingredients against the user's pantry.
- If unsure, assume the ingredient is required.
- Return ONLY valid JSON. No explanations. No markdown.";

const EXTRACT_SYSTEM_PROMPT: &str = "\
You are a highly accurate cooking assistant.

Your task is to analyze a recipe video link and list every ingredient it uses.

Rules:
- Extract the dish title if possible.
- Use the URL context (title, description, transcript if available).
- Name each ingredient once, in lowercase.
- Return ONLY valid JSON. No explanations. No markdown.";

fn analyze_user_prompt(video_url: &str, pantry: &[String]) -> String {
    format!(
        "Video URL:\n{video_url}\n\nUser pantry:\n{}\n\nReturn JSON exactly in this format:\n{{\n  \"dish_name\": \"string\",\n  \"have\": [\"ingredient1\", \"ingredient2\"],\n  \"need_to_buy\": [\"ingredient3\", \"ingredient4\"],\n  \"confidence\": \"high | medium | low\"\n}}",
        pantry.join(", ")
    )
}

fn extract_user_prompt(video_url: &str) -> String {
    format!(
        "Video URL:\n{video_url}\n\nReturn JSON exactly in this format:\n{{\n  \"title\": \"string\",\n  \"ingredients\": [{{ \"name\": \"ingredient\" }}]\n}}"
    )
}

impl<L, C> AnalysisService for Service<L, C>
where
    L: LLMClient,
    C: CaptionsProvider,
{
    async fn analyze_video(&self, input: AnalyzeVideoInput) -> Result<AnalysisResult, CoreError> {
        let raw = self
            .llm_client
            .complete(
                ANALYZE_SYSTEM_PROMPT.to_string(),
                analyze_user_prompt(&input.video_url, &input.pantry),
                recipe_analysis_schema(),
            )
            .await?;

        match serde_json::from_str::<AnalysisResult>(&raw) {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::warn!("model returned invalid analysis JSON: {err}");
                Ok(AnalysisResult::degraded())
            }
        }
    }

    async fn extract_ingredients(
        &self,
        video_url: String,
    ) -> Result<IngredientExtraction, CoreError> {
        let raw = self
            .llm_client
            .complete(
                EXTRACT_SYSTEM_PROMPT.to_string(),
                extract_user_prompt(&video_url),
                ingredient_extraction_schema(),
            )
            .await?;

        #[derive(Deserialize)]
        struct RawExtraction {
            #[serde(default)]
            title: String,
            #[serde(default)]
            ingredients: Vec<DetectedIngredient>,
        }

        match serde_json::from_str::<RawExtraction>(&raw) {
            Ok(extraction) => Ok(IngredientExtraction {
                success: true,
                title: extraction.title,
                ingredients: extraction.ingredients,
            }),
            Err(err) => {
                tracing::warn!("model returned invalid extraction JSON: {err}");
                Ok(IngredientExtraction::failed())
            }
        }
    }
}

/// The client-side analysis flow.
///
/// Checks the pantry before touching any port, then runs the selected
/// strategy. Captions trouble is not a failure: the flow falls back to
/// the backend passthrough.
pub async fn run_video_analysis<B, C>(
    backend: &B,
    captions: &C,
    input: AnalyzeVideoInput,
    strategy: AnalysisStrategy,
) -> Result<AnalysisResult, CoreError>
where
    B: RecipeBackend,
    C: CaptionsProvider,
{
    if input.pantry.is_empty() {
        return Err(CoreError::EmptyPantry);
    }

    match strategy {
        AnalysisStrategy::Extraction => {
            let extraction = backend.extract_ingredients(input.video_url).await?;
            if !extraction.success {
                return Err(CoreError::ExtractionFailed);
            }

            let detected: Vec<String> = extraction
                .ingredients
                .iter()
                .map(|ingredient| normalize_name(&ingredient.name))
                .collect();
            let (have, need_to_buy) = partition_ingredients(&detected, &input.pantry);

            Ok(AnalysisResult {
                dish_name: extraction.title,
                confidence: String::new(),
                have,
                need_to_buy,
            })
        }
        AnalysisStrategy::CaptionsFirst => {
            if let Some(video_id) = VideoId::extract(&input.video_url) {
                match captions.fetch_transcript(video_id).await {
                    Ok(transcript) => {
                        let detected = scan_transcript(&transcript);
                        let (have, need_to_buy) =
                            partition_ingredients(&detected, &input.pantry);
                        return Ok(AnalysisResult {
                            dish_name: String::new(),
                            confidence: String::new(),
                            have,
                            need_to_buy,
                        });
                    }
                    Err(err) => {
                        tracing::warn!("captions unavailable, falling back to backend: {err}");
                    }
                }
            } else {
                tracing::debug!("no video id in url, using backend analysis");
            }

            backend.analyze_video(input.video_url, input.pantry).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ports::{MockLLMClient, MockRecipeBackend};
    use crate::domain::captions::ports::MockCaptionsProvider;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn input(pantry: &[&str]) -> AnalyzeVideoInput {
        AnalyzeVideoInput {
            video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            pantry: owned(pantry),
        }
    }

    #[tokio::test]
    async fn empty_pantry_never_touches_the_ports() {
        // Mocks without expectations panic on any call.
        let backend = MockRecipeBackend::new();
        let captions = MockCaptionsProvider::new();

        for strategy in [AnalysisStrategy::Extraction, AnalysisStrategy::CaptionsFirst] {
            let err = run_video_analysis(&backend, &captions, input(&[]), strategy)
                .await
                .unwrap_err();
            assert!(matches!(err, CoreError::EmptyPantry));
        }
    }

    #[tokio::test]
    async fn extraction_strategy_partitions_locally() {
        let mut backend = MockRecipeBackend::new();
        backend.expect_extract_ingredients().returning(|_| {
            Ok(IngredientExtraction {
                success: true,
                title: "Pasta Carbonara".to_string(),
                ingredients: ["spaghetti", "Eggs", "pecorino", "black pepper"]
                    .iter()
                    .map(|name| DetectedIngredient {
                        name: name.to_string(),
                    })
                    .collect(),
            })
        });
        let captions = MockCaptionsProvider::new();

        let result = run_video_analysis(
            &backend,
            &captions,
            input(&["eggs", "black pepper"]),
            AnalysisStrategy::Extraction,
        )
        .await
        .unwrap();

        assert_eq!(result.dish_name, "Pasta Carbonara");
        assert_eq!(result.have, owned(&["eggs", "black pepper"]));
        assert_eq!(result.need_to_buy, owned(&["spaghetti", "pecorino"]));
    }

    #[tokio::test]
    async fn unsuccessful_extraction_is_a_recoverable_error() {
        let mut backend = MockRecipeBackend::new();
        backend
            .expect_extract_ingredients()
            .returning(|_| Ok(IngredientExtraction::failed()));
        let captions = MockCaptionsProvider::new();

        let err = run_video_analysis(
            &backend,
            &captions,
            input(&["salt"]),
            AnalysisStrategy::Extraction,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::ExtractionFailed));
    }

    #[tokio::test]
    async fn captions_hit_bypasses_the_backend() {
        let backend = MockRecipeBackend::new();
        let mut captions = MockCaptionsProvider::new();
        captions
            .expect_fetch_transcript()
            .returning(|_| Ok("I add salt and olive oil".to_string()));

        let result = run_video_analysis(
            &backend,
            &captions,
            input(&["salt"]),
            AnalysisStrategy::CaptionsFirst,
        )
        .await
        .unwrap();

        assert_eq!(result.have, owned(&["salt"]));
        assert_eq!(result.need_to_buy, owned(&["olive oil"]));
    }

    #[tokio::test]
    async fn captions_failure_falls_back_to_the_backend() {
        let mut backend = MockRecipeBackend::new();
        backend.expect_analyze_video().returning(|_, _| {
            Ok(AnalysisResult {
                dish_name: "Shakshuka".to_string(),
                confidence: "medium".to_string(),
                have: owned(&["eggs"]),
                need_to_buy: owned(&["tomatoes"]),
            })
        });
        let mut captions = MockCaptionsProvider::new();
        captions
            .expect_fetch_transcript()
            .returning(|_| Err(CoreError::CaptionsUnavailable));

        let result = run_video_analysis(
            &backend,
            &captions,
            input(&["eggs"]),
            AnalysisStrategy::CaptionsFirst,
        )
        .await
        .unwrap();

        assert_eq!(result.dish_name, "Shakshuka");
    }

    #[tokio::test]
    async fn non_youtube_url_skips_straight_to_the_backend() {
        let mut backend = MockRecipeBackend::new();
        backend
            .expect_analyze_video()
            .returning(|_, _| Ok(AnalysisResult::degraded()));
        let captions = MockCaptionsProvider::new();

        let result = run_video_analysis(
            &backend,
            &captions,
            AnalyzeVideoInput {
                video_url: "https://vimeo.com/123456789".to_string(),
                pantry: owned(&["salt"]),
            },
            AnalysisStrategy::CaptionsFirst,
        )
        .await
        .unwrap();

        assert_eq!(result.dish_name, "Unknown recipe");
    }

    #[tokio::test]
    async fn service_parses_model_analysis() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete().returning(|_, _, _| {
            Ok(r#"{"dish_name":"Dal","confidence":"high","have":["lentils"],"need_to_buy":["ghee"]}"#
                .to_string())
        });
        let service = Service::new(llm, MockCaptionsProvider::new());

        let result = service.analyze_video(input(&["lentils"])).await.unwrap();

        assert_eq!(result.dish_name, "Dal");
        assert_eq!(result.have, owned(&["lentils"]));
    }

    #[tokio::test]
    async fn service_degrades_on_invalid_model_output() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete()
            .returning(|_, _, _| Ok("Sorry, I cannot help with that.".to_string()));
        let service = Service::new(llm, MockCaptionsProvider::new());

        let result = service.analyze_video(input(&["salt"])).await.unwrap();

        assert_eq!(result, AnalysisResult::degraded());
    }

    #[tokio::test]
    async fn service_marks_unparseable_extraction_as_unsuccessful() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete()
            .returning(|_, _, _| Ok("not json".to_string()));
        let service = Service::new(llm, MockCaptionsProvider::new());

        let extraction = service
            .extract_ingredients("https://youtu.be/dQw4w9WgXcQ".to_string())
            .await
            .unwrap();

        assert!(!extraction.success);
        assert!(extraction.ingredients.is_empty());
    }
}
