use crate::application::http::{
    analysis::router::AnalysisApiDoc, captions::router::CaptionsApiDoc, health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookable API"
    ),
    nest(
        // Empty nest prefix: handlers already carry their full paths. utoipa's derive
        // rejects a literal empty string, so pass it as an expression (identity composer
        // `format!("{base}{path}")` yields the unchanged handler paths at runtime).
        (path = ("").to_string(), api = AnalysisApiDoc),
        (path = ("").to_string(), api = CaptionsApiDoc),
        (path = ("").to_string(), api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
