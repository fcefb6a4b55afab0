use serde_json::json;
use snippet_highlight::{
    BlockScanner, DEFAULT_BACKGROUND_COLOR, HighlightConfig, HighlightRange, HighlightState,
    RenderEdit, is_valid_color, plan_render,
};

const BLADE_TEMPLATE: &str = "\
<html>
<body>
    <?php $title = fetch_title(); ?>
    <h1>{{ $title }}</h1>
    <? render_footer() ?>
</body>
</html>
";

#[test]
fn test_full_pipeline_over_a_template() {
    let scanner = BlockScanner::new();
    let config = HighlightConfig::from_values(
        Some(&json!("rgba(0, 0, 0, 0.2)")),
        Some(&json!(["php", "blade"])),
    );
    assert!(is_valid_color(&config.background_color));
    let state = HighlightState::new(config.background_color.clone());

    match plan_render(&scanner, &state, &config, "blade", BLADE_TEMPLATE) {
        RenderEdit::ReplaceHighlights { ranges, color } => {
            assert_eq!(ranges.len(), 2);
            assert_eq!(color, "rgba(0, 0, 0, 0.2)");

            // Both spans cover their markers, in document order.
            let chars: Vec<char> = BLADE_TEMPLATE.chars().collect();
            for range in &ranges {
                let span: String = chars[range.start..range.end].iter().collect();
                assert!(span.starts_with("<?"));
                assert!(span.ends_with("?>"));
            }
            assert!(ranges[0].end <= ranges[1].start);
        }
        RenderEdit::ClearHighlights => panic!("expected highlights for a supported language"),
    }
}

#[test]
fn test_language_gate_wins_over_marker_content() {
    let scanner = BlockScanner::new();
    let config = HighlightConfig::from_values(None, Some(&json!(["php"])));
    let state = HighlightState::default();

    // Markers everywhere, but `html` is not configured: always clear.
    let edit = plan_render(&scanner, &state, &config, "html", BLADE_TEMPLATE);
    assert_eq!(edit, RenderEdit::ClearHighlights);
}

#[test]
fn test_malformed_store_still_yields_a_working_pipeline() {
    let scanner = BlockScanner::new();
    // Both stored values have the wrong shape; the engine falls back silently.
    let config = HighlightConfig::from_values(Some(&json!(12)), Some(&json!("php")));
    assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);
    assert!(config.supports_language("phtml"));

    let state = HighlightState::default();
    match plan_render(&scanner, &state, &config, "php", "<?php ok ?>") {
        RenderEdit::ReplaceHighlights { ranges, .. } => {
            assert_eq!(ranges, vec![HighlightRange::new(0, 11)]);
        }
        RenderEdit::ClearHighlights => panic!("expected highlights"),
    }
}
