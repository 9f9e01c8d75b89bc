use cookable_core::domain::analysis::entities::AnalysisResult;

/// Everything the result screen shows, derived from an
/// [`AnalysisResult`] without touching the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub dish_name: String,
    pub confidence_line: String,
    pub have: Vec<String>,
    pub need_to_buy: Vec<String>,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let dish_name = if result.dish_name.is_empty() {
            "Recipe".to_string()
        } else {
            result.dish_name.clone()
        };
        let confidence = if result.confidence.is_empty() {
            "unknown"
        } else {
            &result.confidence
        };

        Self {
            dish_name,
            confidence_line: format!("Confidence: {confidence}"),
            have: result.have.clone(),
            need_to_buy: result.need_to_buy.clone(),
        }
    }
}

pub fn paint(view: &ResultView) {
    println!();
    println!("{}", view.dish_name);
    println!("{}", view.confidence_line);
    println!();
    println!("In your pantry:");
    paint_list(&view.have);
    println!();
    println!("Need to buy:");
    paint_list(&view.need_to_buy);
}

fn paint_list(items: &[String]) {
    if items.is_empty() {
        println!("  (none)");
        return;
    }
    for item in items {
        println!("  - {item}");
    }
}

/// Bulleted plain-text block for the clipboard.
pub fn format_shopping_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn view_fills_in_fallback_labels() {
        let view = ResultView::from(&AnalysisResult::default());
        assert_eq!(view.dish_name, "Recipe");
        assert_eq!(view.confidence_line, "Confidence: unknown");
    }

    #[test]
    fn view_keeps_real_values() {
        let result = AnalysisResult {
            dish_name: "Shakshuka".to_string(),
            confidence: "high".to_string(),
            have: owned(&["eggs"]),
            need_to_buy: owned(&["tomatoes"]),
        };
        let view = ResultView::from(&result);
        assert_eq!(view.dish_name, "Shakshuka");
        assert_eq!(view.confidence_line, "Confidence: high");
        assert_eq!(view.have, owned(&["eggs"]));
    }

    #[test]
    fn shopping_list_is_bulleted_lines() {
        let list = format_shopping_list(&owned(&["tomatoes", "feta"]));
        assert_eq!(list, "- tomatoes\n- feta");
    }

    #[test]
    fn empty_shopping_list_is_empty_text() {
        assert_eq!(format_shopping_list(&[]), "");
    }
}
