use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Ledger types
    types.push(clean_type(FinancialCategory::export_to_string()?));
    types.push(clean_type(PaymentStatus::export_to_string()?));
    types.push(clean_type(PaymentState::export_to_string()?));
    types.push(clean_type(FinancialRecord::export_to_string()?));
    types.push(clean_type(FinancialRecordView::export_to_string()?));
    types.push(clean_type(CreateFinancialRecordRequest::export_to_string()?));
    types.push(clean_type(UpdateFinancialRecordRequest::export_to_string()?));
    types.push(clean_type(FinancialRecordsResponse::export_to_string()?));
    types.push(clean_type(LedgerTotals::export_to_string()?));
    types.push(clean_type(MonthlyBucket::export_to_string()?));
    types.push(clean_type(IncomeSourceKind::export_to_string()?));
    types.push(clean_type(IncomeSource::export_to_string()?));
    types.push(clean_type(LedgerSummary::export_to_string()?));

    // Task types
    types.push(clean_type(Task::export_to_string()?));
    types.push(clean_type(TaskPriority::export_to_string()?));
    types.push(clean_type(CreateTaskRequest::export_to_string()?));
    types.push(clean_type(UpdateTaskRequest::export_to_string()?));
    types.push(clean_type(TasksResponse::export_to_string()?));

    // Activity log types
    types.push(clean_type(ActivityLogEntry::export_to_string()?));
    types.push(clean_type(CreateActivityLogRequest::export_to_string()?));
    types.push(clean_type(UpdateActivityLogRequest::export_to_string()?));
    types.push(clean_type(ActivityLogsResponse::export_to_string()?));

    // Time clock and dashboard
    types.push(clean_type(ShiftInput::export_to_string()?));
    types.push(clean_type(ShiftResult::export_to_string()?));
    types.push(clean_type(DashboardSummary::export_to_string()?));

    types.push(clean_type(ErrorDetail::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Everything lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
