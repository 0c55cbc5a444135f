// Integration tests for report export: finalization, snapshot stability,
// insight handling, and JSON persistence.

mod common;

use anyhow::Result;
use common::{frame, happy_analyzer, FailingInsight, StaticInsight};
use emotrack::{EngineError, InsightGenerator, Report, SessionStatus};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_export_closes_active_session() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    analyzer.ingest_frame(&id, frame()).await?;

    let report = analyzer.export(&id, None).await?;
    assert_eq!(report.session_id, id);
    assert_eq!(report.summary.frame_count, 1);
    assert!(report.insight_text.is_none());

    // Export finalizes: the session no longer accepts frames
    let session = analyzer.store().get_session(&id).await?;
    assert_eq!(session.status().await, SessionStatus::Closed);
    let result = analyzer.ingest_frame(&id, frame()).await;
    assert!(matches!(result, Err(EngineError::InvalidState(_))));

    Ok(())
}

#[tokio::test]
async fn test_export_empty_session_fails_without_closing_it() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;

    let result = analyzer.export(&id, None).await;
    assert!(matches!(result, Err(EngineError::EmptySession(_))));

    // The failed export must not finalize the session
    let session = analyzer.store().get_session(&id).await?;
    assert_eq!(session.status().await, SessionStatus::Active);

    Ok(())
}

#[tokio::test]
async fn test_export_unknown_session_fails_with_not_found() {
    let analyzer = happy_analyzer();
    let result = analyzer.export("session-nope", None).await;
    assert!(matches!(result, Err(EngineError::NotFound(_))));
}

#[tokio::test]
async fn test_double_export_yields_identical_reports() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    for _ in 0..3 {
        analyzer.ingest_frame(&id, frame()).await?;
    }

    let first = analyzer.export(&id, None).await?;
    let second = analyzer.export(&id, None).await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_insight_failure_does_not_block_export() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    analyzer.ingest_frame(&id, frame()).await?;

    let generator: &dyn InsightGenerator = &FailingInsight;
    let report = analyzer.export(&id, Some(generator)).await?;
    assert!(report.insight_text.is_none());
    assert_eq!(report.summary.frame_count, 1);

    Ok(())
}

#[tokio::test]
async fn test_export_carries_generated_insight() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer
        .store()
        .create_session("Why this company?")
        .await;
    analyzer.ingest_frame(&id, frame()).await?;

    let generator = StaticInsight("Candidate appears at ease.".to_string());
    let report = analyzer
        .export(&id, Some(&generator as &dyn InsightGenerator))
        .await?;
    assert_eq!(
        report.insight_text.as_deref(),
        Some("Candidate appears at ease.")
    );
    assert_eq!(report.question, "Why this company?");

    Ok(())
}

#[tokio::test]
async fn test_generate_insight_on_demand() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    analyzer.ingest_frame(&id, frame()).await?;

    let generator: Box<dyn InsightGenerator> = Box::new(StaticInsight("ok".to_string()));
    let text = analyzer.generate_insight(&id, generator.as_ref()).await?;
    assert_eq!(text, "ok");

    // On-demand insight does not close the session
    let session = analyzer.store().get_session(&id).await?;
    assert_eq!(session.status().await, SessionStatus::Active);

    Ok(())
}

#[tokio::test]
async fn test_report_json_round_trip() -> Result<()> {
    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    for _ in 0..2 {
        analyzer.ingest_frame(&id, frame()).await?;
    }

    let report = analyzer.export(&id, None).await?;
    let json = serde_json::to_string(&report)?;
    let decoded: Report = serde_json::from_str(&json)?;
    assert_eq!(decoded, report);

    Ok(())
}

#[tokio::test]
async fn test_report_write_json_creates_readable_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let reports_dir = temp_dir.path().join("reports");

    let analyzer = happy_analyzer();
    let id = analyzer.store().create_session("q").await;
    analyzer.ingest_frame(&id, frame()).await?;

    let report = analyzer.export(&id, None).await?;
    let path = report.write_json(&reports_dir)?;

    assert!(path.exists());
    assert!(path.to_string_lossy().ends_with(&format!("{id}.json")));

    let decoded: Report = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(decoded, report);

    Ok(())
}
