//! End-to-end wire format tests across the object catalog.

use serde_json::json;
use tgkit_model::{
    DecodeError, FromWire, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult,
    InlineQueryResultArticle, InlineQueryResultGame, Validate, WireObject,
};

#[test]
fn game_result_full_round_trip_over_the_wire() {
    let result = InlineQueryResult::from(InlineQueryResultGame::new("g1", "chess"));
    let wire = serde_json::to_string(&result).unwrap();
    assert_eq!(wire, r#"{"type":"game","id":"g1","game_short_name":"chess"}"#);

    let decoded: InlineQueryResult = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn deep_object_graph_encodes_identically_on_both_surfaces() {
    let keyboard = InlineKeyboardMarkup::default()
        .add_row(vec![
            InlineKeyboardButton::new("Play").with_callback_data("play"),
            InlineKeyboardButton::new("Rules").with_url("https://example.org/rules"),
        ])
        .add_row(vec![
            InlineKeyboardButton::new("Share").with_switch_inline_query("chess"),
        ]);
    let result = InlineQueryResultGame::new("g1", "chess").with_reply_markup(keyboard);

    let streamed = serde_json::to_string(&result).unwrap();
    let tree = serde_json::to_string(&result.to_value()).unwrap();
    assert_eq!(streamed, tree);

    let decoded = InlineQueryResultGame::from_value(&result.to_value()).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn heterogeneous_result_list_encodes_uniformly() {
    let results = vec![
        InlineQueryResult::from(InlineQueryResultGame::new("g1", "chess")),
        InlineQueryResult::from(
            InlineQueryResultArticle::new("a1", "Chess news").with_description("weekly digest"),
        ),
    ];
    for result in &results {
        result.validate().unwrap();
    }

    let wire = serde_json::to_value(&results).unwrap();
    assert_eq!(
        wire,
        json!([
            {"type": "game", "id": "g1", "game_short_name": "chess"},
            {"type": "article", "id": "a1", "title": "Chess news", "description": "weekly digest"},
        ])
    );
}

#[test]
fn unknown_result_shape_is_surfaced_not_skipped() {
    let err = InlineQueryResult::from_value(&json!({
        "type": "unknown_shape",
        "id": "x",
    }))
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownVariant {
            family: "InlineQueryResult",
            value: "unknown_shape".to_owned(),
        }
    );
}

#[test]
fn nested_button_failure_surfaces_through_the_whole_graph() {
    let keyboard = InlineKeyboardMarkup::default()
        .add_row(vec![InlineKeyboardButton::new("ok")])
        .add_row(vec![InlineKeyboardButton::new("").with_callback_data("bad")]);
    let result = InlineQueryResult::from(
        InlineQueryResultGame::new("g1", "chess").with_reply_markup(keyboard),
    );

    let err = result.validate().unwrap_err();
    assert_eq!(err.object, "InlineKeyboardButton");
    assert_eq!(err.field, "text");
}

#[test]
fn validation_never_runs_during_encode() {
    // An invalid object still encodes; validation is an explicit gate.
    let result = InlineQueryResultGame::new("", "");
    let wire = serde_json::to_string(&result).unwrap();
    assert_eq!(wire, r#"{"type":"game","id":"","game_short_name":""}"#);
    assert!(result.validate().is_err());
}

#[test]
fn inbound_update_payload_decodes_nested_markup() {
    let payload = json!({
        "type": "article",
        "id": "a1",
        "title": "Chess news",
        "url": "https://example.org/news",
        "reply_markup": {
            "inline_keyboard": [[
                {"text": "Open", "url": "https://example.org/news"},
            ]],
        },
    });
    let result: InlineQueryResult = serde_json::from_value(payload).unwrap();
    match result {
        InlineQueryResult::Article(article) => {
            assert_eq!(article.title(), "Chess news");
            let markup = article.reply_markup().unwrap();
            assert_eq!(markup.rows()[0][0].text(), "Open");
        }
        other => panic!("expected article, got {other:?}"),
    }
}
