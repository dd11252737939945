//! End-to-end checklist scenarios against a mock HTTP server.
//!
//! The mock server listens on localhost over plain HTTP, so every scenario
//! carries the HTTPS finding (penalty 10) unless noted. Unmatched paths
//! answer 404, which doubles as "robots.txt/sitemap.xml missing".

use seoscope::analysis::{Evaluator, Rule};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Body text long enough that no word exceeds 5% of the tokens.
const CALM_TEXT: &str = "autumn rivers carry fallen leaves past quiet villages where \
    bakers open early and fishermen mend nets beside wooden piers while distant \
    trains cross iron bridges toward northern cities carrying mail grain timber \
    and travelers reading folded newspapers under warm yellow lamps";

async fn mount_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

async fn mount_ok(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn bare_page_triggers_full_checklist_in_order() {
    let server = MockServer::start().await;
    let body = format!(
        "<html><body>\
         <img src=\"a.png\"><img src=\"b.png\">\
         <p>{CALM_TEXT}</p>\
         </body></html>"
    );
    mount_page(&server, &body).await;
    // robots.txt and sitemap.xml fall through to wiremock's default 404.

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();

    let expected = vec![
        "Missing <title> tag. Add a unique, descriptive title.",
        "Missing <meta name='description'>. Add a description between 50-160 characters.",
        "No <h1> tag found. Use an <h1> for the main heading.",
        "2 images are missing 'alt' attributes. Add descriptive alt text.",
        "Missing <meta name='viewport'>. Add it for mobile responsiveness.",
        "Your website is not secure (missing HTTPS). Get an SSL certificate.",
        "Missing robots.txt file. Add one to guide search engines.",
        "Missing sitemap.xml file. Add one for better indexing.",
        "Missing structured data (Schema.org). Add JSON-LD for better search visibility.",
        "Missing Open Graph & Twitter Card tags. Add for better social media previews.",
        "Missing canonical tag. Add it to prevent duplicate content issues.",
    ];
    assert_eq!(report.suggestions(), expected);

    // 10+10+10+5+5+10+5+5+5+5+5 = 75 in penalties.
    assert_eq!(report.score, 25);

    // The score is recomputable from the findings alone.
    let spent: u32 = report.findings.iter().map(|f| f.penalty).sum();
    assert_eq!(report.score, 100 - spent);
}

#[tokio::test]
async fn clean_page_over_http_only_flags_https() {
    let server = MockServer::start().await;
    let body = format!(
        "<html><head>\
         <title>Fresh coastal weather reports</title>\
         <meta name=\"description\" content=\"Daily coastal weather summaries.\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <script type=\"application/ld+json\">{{\"@type\":\"WebSite\"}}</script>\
         <meta property=\"og:title\" content=\"Weather\">\
         <meta name=\"twitter:title\" content=\"Weather\">\
         <link rel=\"canonical\" href=\"https://example.com/\">\
         </head><body>\
         <h1>Forecast overview</h1>\
         <img src=\"map.png\" alt=\"forecast map\">\
         <p>{CALM_TEXT}</p>\
         </body></html>"
    );
    mount_page(&server, &body).await;
    mount_ok(&server, "/robots.txt", "User-agent: *\nAllow: /\n").await;
    mount_ok(&server, "/sitemap.xml", "<urlset></urlset>").await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].rule, Rule::NotHttps);
    assert_eq!(report.score, 90);
}

#[tokio::test]
async fn non_success_status_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("<html><title>Pretty error page</title></html>"),
        )
        .mount(&server)
        .await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();

    // Body content is irrelevant once the status is not 200.
    assert_eq!(report.score, 0);
    assert_eq!(
        report.suggestions(),
        vec!["Website not reachable. Check the URL."]
    );
}

#[tokio::test]
async fn primary_transport_failure_is_an_error() {
    // Nothing listens on port 1.
    let result = Evaluator::default().evaluate("http://127.0.0.1:1/").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn title_length_boundary_end_to_end() {
    let server = MockServer::start().await;
    let title_60 = "x".repeat(60);
    let body = format!(
        "<html><head><title>{title_60}</title></head>\
         <body><h1>h</h1><p>{CALM_TEXT}</p></body></html>"
    );
    mount_page(&server, &body).await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();
    assert!(!report
        .findings
        .iter()
        .any(|f| matches!(f.rule, Rule::MissingTitle | Rule::LongTitle)));

    let server = MockServer::start().await;
    let title_61 = "x".repeat(61);
    let body = format!(
        "<html><head><title>{title_61}</title></head>\
         <body><h1>h</h1><p>{CALM_TEXT}</p></body></html>"
    );
    mount_page(&server, &body).await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();
    assert!(report.findings.iter().any(|f| f.rule == Rule::LongTitle));
    assert!(report
        .findings
        .iter()
        .any(|f| f.message == "Title is too long (over 60 characters). Shorten it."));
}

#[tokio::test]
async fn broken_links_counted_and_failures_swallowed() {
    let server = MockServer::start().await;
    let body = format!(
        "<html><body><h1>links</h1>\
         <a href=\"/ok\">works</a>\
         <a href=\"/missing\">gone</a>\
         <a href=\"http://127.0.0.1:1/refused\">offsite</a>\
         <p>{CALM_TEXT}</p>\
         </body></html>"
    );
    mount_page(&server, &body).await;
    mount_ok(&server, "/ok", "fine").await;
    // /missing falls through to 404; the :1 link is a transport failure.

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();

    let broken = report
        .findings
        .iter()
        .find(|f| f.rule == Rule::BrokenLinks)
        .expect("broken-link finding");
    // The refused link is excluded from the count, not treated as broken.
    assert_eq!(broken.message, "1 broken links detected. Fix or remove them.");
    assert_eq!(broken.penalty, 10);
}

#[tokio::test]
async fn repeated_words_trigger_keyword_stuffing() {
    let server = MockServer::start().await;
    // Six distinct words, each at 1/6 of all tokens.
    let stuffed: String = ["buy", "cheap", "deal", "sale", "now", "best"]
        .iter()
        .flat_map(|w| std::iter::repeat(*w).take(6))
        .collect::<Vec<_>>()
        .join(" ");
    let body = format!("<html><body><h1>shop</h1><p>{stuffed}</p></body></html>");
    mount_page(&server, &body).await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();
    assert!(report
        .findings
        .iter()
        .any(|f| f.rule == Rule::KeywordStuffing));
}

#[tokio::test]
async fn no_images_never_flags_alt_text() {
    let server = MockServer::start().await;
    let body = format!("<html><body><h1>h</h1><p>{CALM_TEXT}</p></body></html>");
    mount_page(&server, &body).await;

    let report = Evaluator::default().evaluate(&server.uri()).await.unwrap();
    assert!(!report
        .findings
        .iter()
        .any(|f| f.rule == Rule::ImagesMissingAlt));
}

#[tokio::test]
async fn identical_inputs_yield_identical_reports() {
    let server = MockServer::start().await;
    let body = format!("<html><body><p>{CALM_TEXT}</p></body></html>");
    mount_page(&server, &body).await;

    let evaluator = Evaluator::default();
    let first = evaluator.evaluate(&server.uri()).await.unwrap();
    let second = evaluator.evaluate(&server.uri()).await.unwrap();

    assert_eq!(first.score, second.score);
    assert_eq!(first.suggestions(), second.suggestions());
}
