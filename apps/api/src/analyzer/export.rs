//! CSV export of analysis results: one header row plus one row per result.

use chrono::Utc;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;

const CSV_HEADER: [&str; 7] = [
    "resume",
    "status",
    "match_score",
    "key_strengths",
    "missing_skills",
    "feedback",
    "message",
];

/// Serializes results to CSV bytes. Success rows leave `message` empty;
/// error rows leave the score and skill columns empty.
pub fn results_to_csv(results: &[AnalysisResult]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for result in results {
        match result {
            AnalysisResult::Success {
                resume,
                match_score,
                key_strengths,
                missing_skills,
                feedback,
            } => {
                let score = format!("{match_score:.1}");
                let strengths = key_strengths.join("; ");
                let missing = missing_skills.join("; ");
                writer.write_record([
                    resume.as_str(),
                    "success",
                    score.as_str(),
                    strengths.as_str(),
                    missing.as_str(),
                    feedback.as_str(),
                    "",
                ])?;
            }
            AnalysisResult::Error { resume, message } => {
                writer.write_record([resume.as_str(), "error", "", "", "", "", message.as_str()])?;
            }
        }
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV buffer flush failed: {e}")))
}

/// Download filename stamped with the current date,
/// e.g. `resume_analysis_20260806.csv`.
pub fn export_file_name() -> String {
    format!("resume_analysis_{}.csv", Utc::now().format("%Y%m%d"))
}
