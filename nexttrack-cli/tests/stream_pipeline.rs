//! End-to-end pipeline tests: scripted transport chunks through
//! accumulator → decoder → dispatcher with a capturing sink.

use bytes::Bytes;
use futures::stream;
use nexttrack_cli::stream::{pump_events, Dispatcher, MemorySink, StreamSummary};
use nexttrack_common::Result;

/// Run one scripted session and return its rendered lines plus summary
async fn run_session(chunks: Vec<&str>) -> (Vec<String>, StreamSummary) {
    let chunks: Vec<Result<Bytes>> = chunks
        .into_iter()
        .map(|c| Ok(Bytes::copy_from_slice(c.as_bytes())))
        .collect();
    let mut dispatcher = Dispatcher::new(MemorySink::default());
    let summary = pump_events(stream::iter(chunks), &mut dispatcher, std::future::pending())
        .await
        .expect("scripted session should not fail");
    (dispatcher.into_sink().lines, summary)
}

#[tokio::test]
async fn status_event_renders_progress_line() {
    let (lines, summary) =
        run_session(vec!["data: {\"type\":\"Status\",\"message\":\"Analyzing tracks\"}\n"]).await;

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Analyzing tracks"));
    assert_eq!(summary.events_dispatched, 1);
    assert_eq!(summary.terminal, None);
}

#[tokio::test]
async fn candidate_event_renders_name_artist_and_score() {
    let (lines, summary) = run_session(vec![
        "data: {\"type\":\"Candidate\",\"track\":{\"name\":\"Imagine\",\"artist\":\"John Lennon\"},\"score\":0.842}\n",
    ])
    .await;

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Imagine"));
    assert!(lines[0].contains("John Lennon"));
    assert!(lines[0].contains("0.842"));
    assert_eq!(summary.candidates, 1);
}

#[tokio::test]
async fn complete_event_renders_summary_and_ranked_entries() {
    let (lines, summary) = run_session(vec![
        "data: {\"type\":\"Complete\",\"tracks\":[{\"name\":\"A\",\"artist\":\"X\"},{\"name\":\"B\",\"artist\":\"Y\"}]}\n",
    ])
    .await;

    assert!(lines[0].contains('2'));
    assert!(lines[1].contains("1. A by X"));
    assert!(lines[2].contains("2. B by Y"));
    assert_eq!(summary.terminal, Some("Complete"));
}

#[tokio::test]
async fn malformed_frame_is_skipped_and_stream_continues() {
    let (lines, summary) = run_session(vec![
        "data: {not json}\n",
        "data: {\"type\":\"Status\",\"message\":\"recovered\"}\n",
    ])
    .await;

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("recovered"));
    assert_eq!(summary.events_dispatched, 1);
}

#[tokio::test]
async fn framing_only_lines_produce_no_output() {
    let (lines, summary) = run_session(vec![
        "\n",
        ": keep-alive\n",
        "event: ping\n",
        "\n\n",
    ])
    .await;

    assert!(lines.is_empty());
    assert_eq!(summary.events_dispatched, 0);
}

#[tokio::test]
async fn chunk_boundaries_inside_lines_do_not_change_output() {
    // Same bytes as the candidate scenario, split at awkward boundaries
    let whole = "data: {\"type\":\"Candidate\",\"track\":{\"name\":\"Imagine\",\"artist\":\"John Lennon\"},\"score\":0.842}\n";
    let (expected, _) = run_session(vec![whole]).await;

    let (split, _) = run_session(vec![
        "data: {\"type\":\"Can",
        "didate\",\"track\":{\"name\":\"Imagine\",\"artist\":\"John Len",
        "non\"},\"score\":0.842}\n",
    ])
    .await;

    assert_eq!(expected, split);
}

#[tokio::test]
async fn full_session_mirrors_server_event_order() {
    let (lines, summary) = run_session(vec![
        "data: {\"type\":\"Status\",\"message\":\"Resolving seed tracks\"}\n",
        "data: {\"type\":\"Candidate\",\"track\":{\"name\":\"One\",\"artist\":\"U2\"},\"score\":0.91}\n",
        "data: {\"type\":\"Candidate\",\"track\":{\"name\":\"Two\",\"artist\":\"V2\"},\"score\":0.5}\n",
        "data: {\"type\":\"Complete\",\"tracks\":[{\"name\":\"One\",\"artist\":\"U2\"}]}\n",
    ])
    .await;

    assert_eq!(summary.events_dispatched, 4);
    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.terminal, Some("Complete"));
    assert!(lines[0].contains("Resolving seed tracks"));
    assert!(lines[1].contains("One"));
    assert!(lines[2].contains("Two"));
    // Header plus one ranked entry
    assert!(lines[3].contains('1'));
    assert!(lines[4].contains("1. One by U2"));
}

#[tokio::test]
async fn server_error_event_renders_notice_and_session_still_succeeds() {
    let (lines, summary) = run_session(vec![
        "data: {\"type\":\"Error\",\"message\":\"No valid input tracks\"}\n",
    ])
    .await;

    assert!(lines[0].contains("No valid input tracks"));
    assert_eq!(summary.terminal, Some("Error"));
}

#[tokio::test]
async fn replaying_identical_input_produces_identical_output() {
    let script = vec![
        "data: {\"type\":\"Status\",\"message\":\"go\"}\n",
        "data: {bad}\n",
        "data: {\"type\":\"Candidate\",\"track\":{\"name\":\"A\",\"artist\":\"X\"},\"score\":0.25}\n",
        "data: {\"type\":\"Complete\",\"tracks\":[{\"name\":\"A\",\"artist\":\"X\"}]}\n",
    ];

    let (first_lines, first_summary) = run_session(script.clone()).await;
    let (second_lines, second_summary) = run_session(script).await;

    assert_eq!(first_lines, second_lines);
    assert_eq!(first_summary, second_summary);
}
