//! Web form tests against a live server on an ephemeral port.

use gradecalc_server::{run, GradecalcConfig};
use tokio::net::TcpListener;

async fn start_server(config: GradecalcConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { run(listener, &config, std::future::pending()).await });
    format!("http://{addr}/")
}

fn encode(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// All 15 fields with the given absences for every term.
fn full_form(absences: [&'static str; 3]) -> Vec<(&'static str, &'static str)> {
    vec![
        ("prelim_absences", absences[0]),
        ("prelim_exam", "80"),
        ("prelim_quizzes", "90"),
        ("prelim_requirements", "85"),
        ("prelim_recitation", "88"),
        ("mid_absences", absences[1]),
        ("mid_exam", "90"),
        ("mid_quizzes", "90"),
        ("mid_requirements", "90"),
        ("mid_recitation", "90"),
        ("final_absences", absences[2]),
        ("final_exam", "70"),
        ("final_quizzes", "80"),
        ("final_requirements", "75"),
        ("final_recitation", "60"),
    ]
}

async fn post(url: &str, body: String) -> (u16, String) {
    let response = reqwest::Client::new()
        .post(url)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn get_shows_empty_form() {
    let url = start_server(GradecalcConfig::default()).await;
    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("<form method=\"post\""));
    assert!(body.contains("name=\"final_recitation\" value=\"\""));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn valid_submission_shows_results() {
    let url = start_server(GradecalcConfig::default()).await;
    let (status, body) = post(&url, encode(&full_form(["0", "1", "2"]))).await;

    assert_eq!(status, 200);
    assert!(body.contains("Prelim Grade: 84.37"), "{body}");
    assert!(body.contains("Midterm Grade:"));
    assert!(body.contains("Final Grade:"));
    assert!(body.contains("Overall Grade"));
    assert!(body.contains("Required Final Exam score for 75"));
    assert!(body.contains("Required Final Exam score for 90"));
}

#[tokio::test]
async fn failed_term_omits_overall() {
    let url = start_server(GradecalcConfig::default()).await;
    let (status, body) = post(&url, encode(&full_form(["0", "4", "0"]))).await;

    assert_eq!(status, 200);
    assert!(body.contains("Midterm FAILED due to excessive absences."));
    assert!(body.contains("Prelim Grade: 84.37"));
    assert!(!body.contains("Overall Grade"));
    assert!(!body.contains("Required Final Exam"));
}

#[tokio::test]
async fn invalid_submission_redisplays_form_with_values() {
    let url = start_server(GradecalcConfig::default()).await;
    let mut fields = full_form(["0", "1", "2"]);
    fields[6] = ("mid_exam", "150");
    fields[12] = ("final_quizzes", "%3Cb%3E");

    let (status, body) = post(&url, encode(&fields)).await;

    assert_eq!(status, 200);
    assert!(body.contains("Midterm exam: must be between 0 and 100."));
    assert!(body.contains("name=\"mid_exam\" value=\"150\""));
    assert!(body.contains("name=\"prelim_exam\" value=\"80\""));
    assert!(body.contains("name=\"final_quizzes\" value=\"&lt;b&gt;\""));
    assert!(!body.contains("Overall Grade"));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let url = start_server(GradecalcConfig::default()).await;
    let (status, body) = post(&url, encode(&[("prelim_absences", "1")])).await;

    assert_eq!(status, 200);
    assert!(body.contains("Prelim exam: please enter a valid number."));
    assert!(body.contains("name=\"prelim_absences\" value=\"1\""));
}

#[tokio::test]
async fn post_without_form_content_type_shows_form() {
    let url = start_server(GradecalcConfig::default()).await;
    let response = reqwest::Client::new()
        .post(&url)
        .body("")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Prelim absences: please enter a valid integer."));
    assert!(body.contains("name=\"prelim_absences\" value=\"\""));
}

#[tokio::test]
async fn repeated_field_uses_first_value() {
    let url = start_server(GradecalcConfig::default()).await;
    let (status, body) = post(&url, "prelim_absences=1&prelim_absences=x".to_string()).await;

    assert_eq!(status, 200);
    assert!(body.contains("Prelim exam: please enter a valid number."));
    assert!(body.contains("name=\"prelim_absences\" value=\"1\""));
}

#[tokio::test]
async fn identical_submissions_give_identical_pages() {
    let url = start_server(GradecalcConfig::default()).await;
    let (_, first) = post(&url, encode(&full_form(["1", "2", "3"]))).await;
    let (_, second) = post(&url, encode(&full_form(["1", "2", "3"]))).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let config = GradecalcConfig {
        max_body_bytes: 64,
        ..GradecalcConfig::default()
    };
    let url = start_server(config).await;
    let (status, _) = post(&url, encode(&full_form(["0", "0", "0"]))).await;
    assert_eq!(status, 413);
}
