use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use stockquote_lib::{
    Client, InputSource, LookupOutcome, PanelContent, PriceColor, QuoteWidget, Trigger,
};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Recorder = Mutex<Vec<PanelContent>>;

fn apple_body() -> serde_json::Value {
    serde_json::json!({
        "company_name": "Apple Inc.",
        "price": 150,
        "daily_change": 2.5,
        "market_cap": "2.5T",
        "volume": "50M/60M",
        "year_high": 180,
        "year_low": 120,
        "pe_ratio_total": 28,
        "beta": 1.2
    })
}

fn widget(server: &MockServer, ticker: &str) -> QuoteWidget<String, Recorder> {
    QuoteWidget::new(
        Client::with_base_url(&server.uri()),
        ticker.to_string(),
        Mutex::new(Vec::new()),
    )
}

fn rendered(widget: &QuoteWidget<impl InputSource, Recorder>) -> Vec<PanelContent> {
    widget.target().lock().unwrap().clone()
}

/// Hands out one queued value per read, like a field edited between triggers.
struct ScriptedInput(Mutex<VecDeque<String>>);

impl ScriptedInput {
    fn new(values: &[&str]) -> Self {
        Self(Mutex::new(values.iter().map(|v| v.to_string()).collect()))
    }
}

impl InputSource for ScriptedInput {
    fn current_value(&self) -> String {
        self.0.lock().unwrap().pop_front().unwrap_or_default()
    }
}

#[tokio::test]
async fn renders_quote_for_known_ticker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_body()))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget(&server, "AAPL");
    let outcome = widget.lookup_and_render().await;
    assert_eq!(outcome, LookupOutcome::Rendered);

    let seen = rendered(&widget);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], PanelContent::Loading);
    match &seen[1] {
        PanelContent::Quote(panel) => {
            assert_eq!(panel.company_name, "Apple Inc.");
            assert_eq!(panel.price, "$150");
            assert_eq!(panel.price_color, PriceColor::Positive);
            assert_eq!(panel.daily_change, "2.5%");
            assert_eq!(panel.volume, "50M/60M");
            assert_eq!(panel.beta, "1.2");
        }
        other => panic!("expected quote, got {other:?}"),
    }
}

#[tokio::test]
async fn ticker_is_trimmed_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/MSFT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_body()))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget(&server, "  MSFT \t");
    assert_eq!(widget.lookup_and_render().await, LookupOutcome::Rendered);
}

#[tokio::test]
async fn blank_ticker_prompts_without_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_body()))
        .expect(0)
        .mount(&server)
        .await;

    for blank in ["", "   ", "\n\t"] {
        let widget = widget(&server, blank);
        assert_eq!(widget.lookup_and_render().await, LookupOutcome::Prompted);
        let seen = rendered(&widget);
        assert_eq!(seen, vec![PanelContent::Prompt]);
        assert_eq!(seen[0].message().as_deref(), Some("Enter a stock ticker."));
    }
}

#[tokio::test]
async fn non_success_status_is_ticker_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/NOPE"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "No data found" })),
        )
        .mount(&server)
        .await;

    let widget = widget(&server, "NOPE");
    assert_eq!(widget.lookup_and_render().await, LookupOutcome::Failed);
    let last = rendered(&widget).pop().unwrap();
    assert_eq!(last.message().as_deref(), Some("Error: Ticker not found"));
}

#[tokio::test]
async fn error_body_is_shown_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/XXXX"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Invalid ticker" })),
        )
        .mount(&server)
        .await;

    let widget = widget(&server, "XXXX");
    assert_eq!(widget.lookup_and_render().await, LookupOutcome::Failed);
    let seen = rendered(&widget);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1], PanelContent::Error("Invalid ticker".to_string()));
    assert_eq!(seen[1].message().as_deref(), Some("Error: Invalid ticker"));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let widget = widget(&server, "AAPL");
    assert_eq!(widget.lookup_and_render().await, LookupOutcome::Failed);
    let message = rendered(&widget).pop().unwrap().message().unwrap();
    assert!(message.starts_with("Error: Invalid response:"), "{message}");
}

#[tokio::test]
async fn sparse_quote_uses_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/TINY"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "company_name": "Tiny Corp" })),
        )
        .mount(&server)
        .await;

    let widget = widget(&server, "TINY");
    widget.lookup_and_render().await;
    match rendered(&widget).pop().unwrap() {
        PanelContent::Quote(panel) => {
            assert_eq!(panel.company_name, "Tiny Corp");
            assert_eq!(panel.price_color, PriceColor::Neutral);
            for (label, value) in panel.rows() {
                assert_eq!(value, "N/A", "{label}");
            }
        }
        other => panic!("expected quote, got {other:?}"),
    }
}

#[tokio::test]
async fn other_keys_do_not_trigger() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_body()))
        .expect(2)
        .mount(&server)
        .await;

    let widget = widget(&server, "AAPL");
    assert_eq!(widget.on_trigger(&Trigger::KeyDown("a".into())).await, None);
    assert!(rendered(&widget).is_empty());

    assert_eq!(
        widget.on_trigger(&Trigger::KeyDown("Enter".into())).await,
        Some(LookupOutcome::Rendered)
    );
    assert_eq!(
        widget.on_trigger(&Trigger::Click).await,
        Some(LookupOutcome::Rendered)
    );
}

#[tokio::test]
async fn stale_response_does_not_overwrite_newer_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/SLOW"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "company_name": "Slow Co" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stock/FAST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "company_name": "Fast Co" })),
        )
        .mount(&server)
        .await;

    let widget = QuoteWidget::new(
        Client::with_base_url(&server.uri()),
        ScriptedInput::new(&["SLOW", "FAST"]),
        Recorder::new(Vec::new()),
    );

    let (first, second) = tokio::join!(widget.lookup_and_render(), widget.lookup_and_render());
    assert_eq!(first, LookupOutcome::Superseded);
    assert_eq!(second, LookupOutcome::Rendered);

    let seen = rendered(&widget);
    assert_eq!(seen.len(), 3);
    match seen.last().unwrap() {
        PanelContent::Quote(panel) => assert_eq!(panel.company_name, "Fast Co"),
        other => panic!("expected quote, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_trigger_supersedes_in_flight_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/SLOW"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "company_name": "Slow Co" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let widget = QuoteWidget::new(
        Client::with_base_url(&server.uri()),
        ScriptedInput::new(&["SLOW", " "]),
        Recorder::new(Vec::new()),
    );

    let (first, second) = tokio::join!(widget.lookup_and_render(), widget.lookup_and_render());
    assert_eq!(first, LookupOutcome::Superseded);
    assert_eq!(second, LookupOutcome::Prompted);
    assert_eq!(
        rendered(&widget),
        vec![PanelContent::Loading, PanelContent::Prompt]
    );
}
